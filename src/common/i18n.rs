// src/common/i18n.rs

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

pub const DEFAULT_LANG: &str = "es";

// Catálogos embutidos no binário
const CATALOGS: [(&str, &str); 3] = [
    ("es", include_str!("../../locales/es.json")),
    ("pt", include_str!("../../locales/pt.json")),
    ("en", include_str!("../../locales/en.json")),
];

static SHARED: LazyLock<I18nStore> = LazyLock::new(I18nStore::embedded);

/// Mensagens de erro traduzidas, indexadas por idioma e chave.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: Arc<HashMap<String, HashMap<String, String>>>,
}

impl I18nStore {
    /// A instância compartilhada, carregada uma única vez.
    pub fn shared() -> Self {
        SHARED.clone()
    }

    fn embedded() -> Self {
        let mut messages = HashMap::new();
        for (lang, raw) in CATALOGS {
            match serde_json::from_str::<HashMap<String, String>>(raw) {
                Ok(catalog) => {
                    messages.insert(lang.to_string(), catalog);
                }
                Err(e) => tracing::error!("Catálogo de idioma '{}' inválido: {}", lang, e),
            }
        }
        Self { messages: Arc::new(messages) }
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.messages.contains_key(lang)
    }

    /// Busca a mensagem no idioma pedido; cai para o espanhol e, por último, para a própria chave.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.messages
            .get(lang)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| self.messages.get(DEFAULT_LANG).and_then(|c| c.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
