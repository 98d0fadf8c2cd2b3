//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use polydoc_config::{ConfigError, PolydocConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_analyzer_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analyzer]
program = "node"
args = ["dump-analysis.js", "--json"]
timeout_secs = 15
"#,
        )?;

        let config: PolydocConfig = Figment::from(Serialized::defaults(PolydocConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.analyzer.program, "node");
        assert_eq!(
            config.analyzer.args,
            vec!["dump-analysis.js".to_string(), "--json".to_string()]
        );
        assert_eq!(config.analyzer.timeout_secs, 15);
        assert!(config.analyzer.is_configured());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
pretty = true
"#,
        )?;

        let config: PolydocConfig = Figment::from(Serialized::defaults(PolydocConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.output.pretty);
        assert_eq!(config.extract.behavior_namespace, "Polymer");
        assert_eq!(config.analyzer.timeout_secs, 60);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".polydoc")?;
        jail.create_file(
            ".polydoc/config.toml",
            r#"
[extract]
behavior_namespace = "Acme"
"#,
        )?;

        let config = PolydocConfig::load().expect("config loads");
        assert_eq!(config.extract.behavior_namespace, "Acme");
        Ok(())
    });
}

#[test]
fn invalid_toml_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".polydoc")?;
        jail.create_file(
            ".polydoc/config.toml",
            r#"
[extract]
behavior_namespace = "Polymer."
"#,
        )?;

        assert!(PolydocConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn zero_timeout_loads_but_blocks_the_analyzer() {
    Jail::expect_with(|jail| {
        jail.create_dir(".polydoc")?;
        jail.create_file(
            ".polydoc/config.toml",
            r#"
[analyzer]
program = "node"
timeout_secs = 0
"#,
        )?;

        let config = PolydocConfig::load().expect("zero timeout still loads");
        assert!(matches!(
            config.require_analyzer(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "analyzer.timeout_secs"
        ));
        Ok(())
    });
}
