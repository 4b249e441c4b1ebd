use figment::Jail;
use rmc_config::{LOCAL_CONFIG_FILE, ReadmeConfig};

#[test]
fn conventional_variables_fill_credentials() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("GITHUB_TOKEN", "ghp_conventional");
        jail.set_env("GEMINI_API_KEY", "AIza-conventional");

        let config = ReadmeConfig::load().expect("config loads");
        assert_eq!(config.github.token, "ghp_conventional");
        assert_eq!(config.gemini.api_key, "AIza-conventional");
        assert!(config.require_gemini().is_ok());
        Ok(())
    });
}

#[test]
fn prefixed_variables_beat_conventional_ones() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("GITHUB_TOKEN", "ghp_conventional");
        jail.set_env("READMECRAFT_GITHUB__TOKEN", "ghp_prefixed");

        let config = ReadmeConfig::load().expect("config loads");
        assert_eq!(config.github.token, "ghp_prefixed");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[walk]
max_depth = 2
max_entries = 10
"#,
        )?;
        jail.set_env("READMECRAFT_WALK__MAX_DEPTH", "5");

        let config = ReadmeConfig::load().expect("config loads");
        assert_eq!(config.walk.max_depth, 5);
        assert_eq!(config.walk.max_entries, 10);
        Ok(())
    });
}

#[test]
fn unrelated_variables_are_ignored() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("GITHUB_ACTIONS", "true");

        let config = ReadmeConfig::load().expect("config loads");
        assert!(!config.github.is_configured());
        Ok(())
    });
}
