// Environment layer tests. Kept in their own binary: `Jail` sets process
// env vars, which would leak into the file-only tests running alongside.
#![allow(clippy::unwrap_used)]

use figment::Jail;
use pretty_assertions::assert_eq;

use agenda_config::{Overrides, load_config_from, resolve_dashboard_config};

#[test]
fn test_env_defines_a_profile_and_selects_it() {
    Jail::expect_with(|jail| {
        jail.set_env("VOICE_AGENDA_DEFAULT_PROFILE", "envp");
        jail.set_env("VOICE_AGENDA_PROFILES__ENVP__BASE_URL", "http://127.0.0.1:7401");
        jail.set_env("VOICE_AGENDA_PROFILES__ENVP__TIMEOUT_SECS", "9");

        let cfg = load_config_from(&jail.directory().join("absent.toml"))
            .map_err(|e| e.to_string())?;
        assert_eq!(cfg.default_profile_name(), "envp");
        assert_eq!(
            cfg.profiles["envp"].base_url.as_deref(),
            Some("http://127.0.0.1:7401")
        );

        let dashboard = resolve_dashboard_config(&cfg, None, &Overrides::default())
            .map_err(|e| e.to_string())?;
        assert_eq!(dashboard.base_url.as_str(), "http://127.0.0.1:7401/");
        assert_eq!(dashboard.timeout, Some(std::time::Duration::from_secs(9)));
        Ok(())
    });
}

#[test]
fn test_env_wins_over_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
            default_profile = "local"

            [defaults]
            output = "table"

            [profiles.local]
            base_url = "http://localhost:8001"
            "#,
        )?;
        jail.set_env("VOICE_AGENDA_DEFAULTS__OUTPUT", "yaml");
        jail.set_env("VOICE_AGENDA_PROFILES__LOCAL__BASE_URL", "http://10.0.0.5:8001");

        let cfg = load_config_from(&jail.directory().join("config.toml"))
            .map_err(|e| e.to_string())?;
        assert_eq!(cfg.defaults.output, "yaml");
        assert_eq!(
            cfg.profiles["local"].base_url.as_deref(),
            Some("http://10.0.0.5:8001")
        );
        Ok(())
    });
}
