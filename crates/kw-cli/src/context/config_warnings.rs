use kw_config::KewenConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &KewenConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &KewenConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("Gemini", "KEWEN_GEMINI", "KEWEN_GEMINI__API_KEY", config.gemini.is_configured()),
        ("DeepSeek", "KEWEN_DEEPSEEK", "KEWEN_DEEPSEEK__API_KEY", config.deepseek.is_configured()),
        ("Speech", "KEWEN_SPEECH", "KEWEN_SPEECH__KEY", config.speech.is_configured()),
        ("Sheets", "KEWEN_SHEETS", "KEWEN_SHEETS__CREDENTIALS_PATH", config.sheets.is_configured()),
    ];

    sections
        .into_iter()
        .filter(|(_, prefix, _, configured)| !configured && has_env_prefix(&env_keys, prefix))
        .map(|(name, prefix, example, _)| {
            format!(
                "{name} config appears default while {prefix}* env vars exist. Use double underscores (example: {example})."
            )
        })
        .collect()
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
