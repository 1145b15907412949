use figment::Jail;
use kw_config::KewenConfig;
use kw_core::enums::AiModel;

#[test]
fn env_fills_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("KEWEN_SPEECH__KEY", "speech-key");
        jail.set_env("KEWEN_SPEECH__REGION", "eastasia");
        jail.set_env("KEWEN_DEEPSEEK__API_KEY", "ds-key");

        let config = KewenConfig::load().expect("config loads");
        assert!(config.speech.is_configured());
        assert_eq!(config.deepseek.api_key, "ds-key");
        Ok(())
    });
}

#[test]
fn env_selects_default_model() {
    Jail::expect_with(|jail| {
        jail.set_env("KEWEN_GENERAL__DEFAULT_MODEL", "deepseek");

        let config = KewenConfig::load().expect("config loads");
        assert_eq!(config.general.default_model, AiModel::DeepSeek);
        Ok(())
    });
}

#[test]
fn single_underscore_keys_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("KEWEN_GEMINI_API_KEY", "typo");

        let config = KewenConfig::load().expect("config loads");
        assert!(!config.gemini.is_configured());
        Ok(())
    });
}
