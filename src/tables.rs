//! Per-language term-replacement tables.
//!
//! A table is an *ordered* list of `(term, replacement)` pairs; application
//! order is table order, and later rules may re-match text produced by
//! earlier ones. That ordering is observable behavior and must stay stable,
//! which is why pairs live in vectors (and user terms files are parsed with
//! `serde_json`'s `preserve_order` feature) rather than in sorted maps.
//!
//! Built-in dictionaries cover the nine languages the generator ships for.
//! A user terms file can extend them:
//!
//! ```json
//! { "de": { "search": "Suche" }, "sv": { "Hello": "Hej" } }
//! ```
//!
//! File pairs are appended after the built-in pairs of the same language,
//! so they apply last.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;

type TermPair = (&'static str, &'static str);

/// Ordered term dictionaries keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct TranslationTables {
    map: HashMap<String, Vec<(String, String)>>,
}

impl TranslationTables {
    /// Empty table set, mainly for tests and callers supplying all terms.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in dictionaries.
    pub fn builtin() -> Self {
        let mut map = HashMap::new();
        for (lang, pairs) in BUILTIN {
            map.insert(
                (*lang).to_string(),
                pairs
                    .iter()
                    .map(|(term, replacement)| ((*term).to_string(), (*replacement).to_string()))
                    .collect(),
            );
        }
        Self { map }
    }

    pub fn get(&self, lang: &str) -> Option<&[(String, String)]> {
        self.map.get(lang).map(Vec::as_slice)
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.map.contains_key(lang)
    }

    /// Append pairs for a language, creating the table if needed.
    pub fn extend(&mut self, lang: &str, pairs: Vec<(String, String)>) {
        self.map.entry(lang.to_string()).or_default().extend(pairs);
    }

    /// Merge a JSON terms file: `{ "<lang>": { "<term>": "<replacement>" } }`.
    ///
    /// Object order in the file becomes application order; pairs for a
    /// language that already has a built-in table are appended after it.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read terms file: {}", path.display()))?;
        let parsed: serde_json::Map<String, Value> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse terms file: {}", path.display()))?;

        for (lang, terms) in parsed {
            let object = terms
                .as_object()
                .with_context(|| format!("Terms for \"{}\" must be an object", lang))?;
            let mut pairs = Vec::with_capacity(object.len());
            for (term, replacement) in object {
                let replacement = replacement.as_str().with_context(|| {
                    format!("Replacement for \"{}\" in \"{}\" must be a string", term, lang)
                })?;
                pairs.push((term.clone(), replacement.to_string()));
            }
            self.extend(&lang, pairs);
        }
        Ok(())
    }

    /// Compile every table into whole-word, case-insensitive match rules.
    ///
    /// Done once at startup; the result is read-only for the rest of the
    /// run.
    pub fn compile(&self) -> Result<CompiledTables> {
        let mut map = HashMap::new();
        for (lang, pairs) in &self.map {
            let mut rules = Vec::with_capacity(pairs.len());
            for (term, replacement) in pairs {
                let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                    .with_context(|| format!("Invalid term \"{}\" for \"{}\"", term, lang))?;
                rules.push(TermRule {
                    pattern,
                    replacement: replacement.clone(),
                });
            }
            map.insert(lang.clone(), rules);
        }
        Ok(CompiledTables { map })
    }
}

/// One substitution rule: a whole-word, case-insensitive pattern and its
/// literal replacement.
#[derive(Debug)]
pub struct TermRule {
    pub pattern: Regex,
    pub replacement: String,
}

/// Ready-to-apply rule lists keyed by language code.
#[derive(Debug, Default)]
pub struct CompiledTables {
    map: HashMap<String, Vec<TermRule>>,
}

impl CompiledTables {
    pub fn get(&self, lang: &str) -> Option<&[TermRule]> {
        self.map.get(lang).map(Vec::as_slice)
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.map.contains_key(lang)
    }
}

const BUILTIN: &[(&str, &[TermPair])] = &[
    ("de", DE_TERMS),
    ("fr", FR_TERMS),
    ("it", IT_TERMS),
    ("es", ES_TERMS),
    ("pt", PT_TERMS),
    ("cs", CS_TERMS),
    ("sk", SK_TERMS),
    ("ro", RO_TERMS),
    ("nl", NL_TERMS),
];

const DE_TERMS: &[TermPair] = &[
    ("Hello", "Hallo"),
    ("This is", "Das ist"),
    ("bot", "Bot"),
    ("Basic commands", "Grundlegende Befehle"),
    ("show", "zeigen"),
    ("your", "deine"),
    ("active", "aktiven"),
    ("monitored", "überwachten"),
    ("links", "Links"),
    ("disable", "deaktivieren"),
    ("monitoring", "Überwachung"),
    ("add new", "neu hinzufügen"),
    ("to monitor", "zum Überwachen"),
    ("status", "Status"),
    ("plan", "Plan"),
    ("and", "und"),
    ("notifications", "Benachrichtigungen"),
    ("open", "öffnen"),
    ("panel", "Panel"),
    ("enable", "aktivieren"),
    ("single", "einzeln"),
    ("batch", "gesammelt"),
    ("list", "Liste"),
    ("e.g.", "z.B."),
    ("Quiet hours", "Ruhezeiten"),
    ("set", "setzen"),
    ("Examples", "Beispiele"),
    ("or", "oder"),
    ("Language", "Sprache"),
    ("enabled", "aktiviert"),
    ("total", "gesamt"),
    ("daily limit", "Tageslimit"),
    ("ENABLED", "AKTIVIERT"),
    ("DISABLED", "DEAKTIVIERT"),
    ("unknown", "unbekannt"),
    ("from", "von"),
    ("to", "bis"),
];

const FR_TERMS: &[TermPair] = &[
    ("Hello", "Bonjour"),
    ("This is", "Ceci est"),
    ("bot", "bot"),
    ("Basic commands", "Commandes de base"),
    ("show", "afficher"),
    ("your", "tes"),
    ("active", "actifs"),
    ("monitored", "surveillés"),
    ("links", "liens"),
    ("disable", "désactiver"),
    ("monitoring", "surveillance"),
    ("add new", "ajouter nouveau"),
    ("to monitor", "à surveiller"),
    ("status", "statut"),
    ("plan", "plan"),
    ("and", "et"),
    ("notifications", "notifications"),
    ("open", "ouvrir"),
    ("panel", "panneau"),
    ("enable", "activer"),
    ("single", "unique"),
    ("batch", "groupe"),
    ("list", "liste"),
    ("e.g.", "p.ex."),
    ("Quiet hours", "Heures de silence"),
    ("set", "définir"),
    ("Examples", "Exemples"),
    ("or", "ou"),
    ("Language", "Langue"),
    ("enabled", "activé"),
    ("total", "total"),
    ("daily limit", "limite quotidienne"),
    ("ENABLED", "ACTIVÉ"),
    ("DISABLED", "DÉSACTIVÉ"),
    ("unknown", "inconnu"),
    ("from", "de"),
    ("to", "à"),
];

const IT_TERMS: &[TermPair] = &[
    ("Hello", "Ciao"),
    ("This is", "Questo è"),
    ("bot", "bot"),
    ("Basic commands", "Comandi base"),
    ("show", "mostrare"),
    ("your", "tuoi"),
    ("active", "attivi"),
    ("monitored", "monitorati"),
    ("links", "link"),
    ("disable", "disattivare"),
    ("monitoring", "monitoraggio"),
    ("add new", "aggiungi nuovo"),
    ("to monitor", "da monitorare"),
    ("status", "stato"),
    ("plan", "piano"),
    ("and", "e"),
    ("notifications", "notifiche"),
    ("open", "aprire"),
    ("panel", "pannello"),
    ("enable", "attivare"),
    ("single", "singola"),
    ("batch", "gruppo"),
    ("list", "lista"),
    ("e.g.", "es."),
    ("Quiet hours", "Ore silenziose"),
    ("set", "impostare"),
    ("Examples", "Esempi"),
    ("or", "o"),
    ("Language", "Lingua"),
    ("enabled", "attivato"),
    ("total", "totale"),
    ("daily limit", "limite giornaliero"),
    ("ENABLED", "ATTIVATO"),
    ("DISABLED", "DISATTIVATO"),
    ("unknown", "sconosciuto"),
    ("from", "da"),
    ("to", "a"),
];

const ES_TERMS: &[TermPair] = &[
    ("Hello", "Hola"),
    ("This is", "Este es"),
    ("bot", "bot"),
    ("Basic commands", "Comandos básicos"),
    ("show", "mostrar"),
    ("your", "tus"),
    ("active", "activos"),
    ("monitored", "monitoreados"),
    ("links", "enlaces"),
    ("disable", "desactivar"),
    ("monitoring", "monitoreo"),
    ("add new", "agregar nuevo"),
    ("to monitor", "para monitorear"),
    ("status", "estado"),
    ("plan", "plan"),
    ("and", "y"),
    ("notifications", "notificaciones"),
    ("open", "abrir"),
    ("panel", "panel"),
    ("enable", "activar"),
    ("single", "individual"),
    ("batch", "lote"),
    ("list", "lista"),
    ("e.g.", "p.ej."),
    ("Quiet hours", "Horas silenciosas"),
    ("set", "establecer"),
    ("Examples", "Ejemplos"),
    ("or", "o"),
    ("Language", "Idioma"),
    ("enabled", "activado"),
    ("total", "total"),
    ("daily limit", "límite diario"),
    ("ENABLED", "ACTIVADO"),
    ("DISABLED", "DESACTIVADO"),
    ("unknown", "desconocido"),
    ("from", "desde"),
    ("to", "hasta"),
];

const PT_TERMS: &[TermPair] = &[
    ("Hello", "Olá"),
    ("This is", "Este é"),
    ("bot", "bot"),
    ("Basic commands", "Comandos básicos"),
    ("show", "mostrar"),
    ("your", "seus"),
    ("active", "ativos"),
    ("monitored", "monitorados"),
    ("links", "links"),
    ("disable", "desativar"),
    ("monitoring", "monitoramento"),
    ("add new", "adicionar novo"),
    ("to monitor", "para monitorar"),
    ("status", "status"),
    ("plan", "plano"),
    ("and", "e"),
    ("notifications", "notificações"),
    ("open", "abrir"),
    ("panel", "painel"),
    ("enable", "ativar"),
    ("single", "individual"),
    ("batch", "lote"),
    ("list", "lista"),
    ("e.g.", "ex."),
    ("Quiet hours", "Horário silencioso"),
    ("set", "definir"),
    ("Examples", "Exemplos"),
    ("or", "ou"),
    ("Language", "Idioma"),
    ("enabled", "ativado"),
    ("total", "total"),
    ("daily limit", "limite diário"),
    ("ENABLED", "ATIVADO"),
    ("DISABLED", "DESATIVADO"),
    ("unknown", "desconhecido"),
    ("from", "de"),
    ("to", "até"),
];

const CS_TERMS: &[TermPair] = &[
    ("Hello", "Ahoj"),
    ("This is", "Toto je"),
    ("bot", "bot"),
    ("Basic commands", "Základní příkazy"),
    ("show", "zobrazit"),
    ("your", "tvoje"),
    ("active", "aktivní"),
    ("monitored", "monitorované"),
    ("links", "odkazy"),
    ("disable", "deaktivovat"),
    ("monitoring", "monitorování"),
    ("add new", "přidat nový"),
    ("to monitor", "k monitorování"),
    ("status", "stav"),
    ("plan", "plán"),
    ("and", "a"),
    ("notifications", "oznámení"),
    ("open", "otevřít"),
    ("panel", "panel"),
    ("enable", "aktivovat"),
    ("single", "jednotlivé"),
    ("batch", "dávkové"),
    ("list", "seznam"),
    ("e.g.", "např."),
    ("Quiet hours", "Tichý režim"),
    ("set", "nastavit"),
    ("Examples", "Příklady"),
    ("or", "nebo"),
    ("Language", "Jazyk"),
    ("enabled", "aktivováno"),
    ("total", "celkem"),
    ("daily limit", "denní limit"),
    ("ENABLED", "AKTIVOVÁNO"),
    ("DISABLED", "DEAKTIVOVÁNO"),
    ("unknown", "neznámý"),
    ("from", "od"),
    ("to", "do"),
];

const SK_TERMS: &[TermPair] = &[
    ("Hello", "Ahoj"),
    ("This is", "Toto je"),
    ("bot", "bot"),
    ("Basic commands", "Základné príkazy"),
    ("show", "zobraziť"),
    ("your", "tvoje"),
    ("active", "aktívne"),
    ("monitored", "monitorované"),
    ("links", "odkazy"),
    ("disable", "deaktivovať"),
    ("monitoring", "monitorovanie"),
    ("add new", "pridať nový"),
    ("to monitor", "na monitorovanie"),
    ("status", "stav"),
    ("plan", "plán"),
    ("and", "a"),
    ("notifications", "upozornenia"),
    ("open", "otvoriť"),
    ("panel", "panel"),
    ("enable", "aktivovať"),
    ("single", "jednotlivé"),
    ("batch", "dávkové"),
    ("list", "zoznam"),
    ("e.g.", "napr."),
    ("Quiet hours", "Tichý režim"),
    ("set", "nastaviť"),
    ("Examples", "Príklady"),
    ("or", "alebo"),
    ("Language", "Jazyk"),
    ("enabled", "aktivované"),
    ("total", "celkom"),
    ("daily limit", "denný limit"),
    ("ENABLED", "AKTIVOVANÉ"),
    ("DISABLED", "DEAKTIVOVANÉ"),
    ("unknown", "neznámy"),
    ("from", "od"),
    ("to", "do"),
];

const RO_TERMS: &[TermPair] = &[
    ("Hello", "Bună"),
    ("This is", "Acesta este"),
    ("bot", "bot"),
    ("Basic commands", "Comenzi de bază"),
    ("show", "arată"),
    ("your", "tale"),
    ("active", "active"),
    ("monitored", "monitorizate"),
    ("links", "link-uri"),
    ("disable", "dezactivează"),
    ("monitoring", "monitorizare"),
    ("add new", "adaugă nou"),
    ("to monitor", "de monitorizat"),
    ("status", "stare"),
    ("plan", "plan"),
    ("and", "și"),
    ("notifications", "notificări"),
    ("open", "deschide"),
    ("panel", "panou"),
    ("enable", "activează"),
    ("single", "individual"),
    ("batch", "lot"),
    ("list", "listă"),
    ("e.g.", "de ex."),
    ("Quiet hours", "Ore liniștite"),
    ("set", "setează"),
    ("Examples", "Exemple"),
    ("or", "sau"),
    ("Language", "Limbă"),
    ("enabled", "activat"),
    ("total", "total"),
    ("daily limit", "limită zilnică"),
    ("ENABLED", "ACTIVAT"),
    ("DISABLED", "DEZACTIVAT"),
    ("unknown", "necunoscut"),
    ("from", "de la"),
    ("to", "la"),
];

const NL_TERMS: &[TermPair] = &[
    ("Hello", "Hallo"),
    ("This is", "Dit is"),
    ("bot", "bot"),
    ("Basic commands", "Basiscommando's"),
    ("show", "toon"),
    ("your", "jouw"),
    ("active", "actieve"),
    ("monitored", "gemonitorde"),
    ("links", "links"),
    ("disable", "deactiveren"),
    ("monitoring", "monitoring"),
    ("add new", "voeg nieuw toe"),
    ("to monitor", "om te monitoren"),
    ("status", "status"),
    ("plan", "plan"),
    ("and", "en"),
    ("notifications", "meldingen"),
    ("open", "open"),
    ("panel", "paneel"),
    ("enable", "activeren"),
    ("single", "enkel"),
    ("batch", "batch"),
    ("list", "lijst"),
    ("e.g.", "bijv."),
    ("Quiet hours", "Stille uren"),
    ("set", "instellen"),
    ("Examples", "Voorbeelden"),
    ("or", "of"),
    ("Language", "Taal"),
    ("enabled", "geactiveerd"),
    ("total", "totaal"),
    ("daily limit", "dagelijkse limiet"),
    ("ENABLED", "GEACTIVEERD"),
    ("DISABLED", "GEDEACTIVEERD"),
    ("unknown", "onbekend"),
    ("from", "van"),
    ("to", "tot"),
];
