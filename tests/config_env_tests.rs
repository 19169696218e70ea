//! Environment overrides, kept in their own binary so the variables cannot
//! leak into other config tests.

use x42_client::infrastructure::config::settings::Config;

#[test]
fn environment_overrides_file_values() {
    std::env::set_var("X42_API_URL", "http://192.168.1.20:42220/api");
    std::env::set_var("X42_WALLET", "from-env");

    let config = Config::parse_toml(
        "[daemon]\napi_url = \"http://localhost:1/api\"\n[wallet]\nname = \"from-file\"\n",
    )
    .unwrap();

    std::env::remove_var("X42_API_URL");
    std::env::remove_var("X42_WALLET");

    assert_eq!(
        config.daemon.api_url.as_deref(),
        Some("http://192.168.1.20:42220/api")
    );
    assert_eq!(config.wallet.name.as_deref(), Some("from-env"));
    assert_eq!(
        config.daemon.endpoint().unwrap().as_str(),
        "http://192.168.1.20:42220/api"
    );
}
