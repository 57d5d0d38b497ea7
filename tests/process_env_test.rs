use anyhow::Result;
use multisweeper_env::{EnvError, PublicConfigLoader, PublicEnv, SERVER_URL_KEY};
use tempfile::TempDir;

// Mutates PUBLIC_SERVER_URL of this test process, so the scenarios run in sequence.
#[test]
fn test_loader_against_process_environment() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join(".env"),
        "PUBLIC_SERVER_URL=http://localhost:3000\nSECRET_KEY=do-not-leak\n",
    )?;
    let with_files = PublicConfigLoader::new().with_env_dir(dir.path());

    // Scenario C: not defined anywhere
    std::env::remove_var(SERVER_URL_KEY);
    match PublicConfigLoader::new().load() {
        Err(EnvError::MissingConfigError { field }) => assert_eq!(field, SERVER_URL_KEY),
        other => panic!("expected missing config error, got {:?}", other),
    }

    // Only the .env file defines it
    assert_eq!(with_files.load()?.server_url(), "http://localhost:3000");

    // Scenario A: the deployment value wins over the file
    std::env::set_var(SERVER_URL_KEY, "https://api.example.com");
    assert_eq!(with_files.load()?.server_url(), "https://api.example.com");
    assert_eq!(
        PublicConfigLoader::new().load()?.server_url(),
        "https://api.example.com"
    );

    // Scenario B: empty is still defined and still wins
    std::env::set_var(SERVER_URL_KEY, "");
    assert_eq!(with_files.load()?.server_url(), "");

    let public = PublicEnv::collect(&with_files.build_source()?)?;
    assert_eq!(public.get(SERVER_URL_KEY), Some(""));
    assert_eq!(public.get("SECRET_KEY"), None);

    std::env::remove_var(SERVER_URL_KEY);
    Ok(())
}
