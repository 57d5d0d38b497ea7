use multisweeper_env::core::global;
use multisweeper_env::{EnvError, MapEnv, PublicConfig, SERVER_URL_KEY};

// The cell is process-wide, so the whole lifecycle runs in one test.
#[test]
fn test_server_url_lifecycle() {
    assert_eq!(global::server_url(), None);

    // 缺少設定時不應寫入
    let missing = MapEnv::new().with("PUBLIC_OTHER", "x");
    match global::init(&missing) {
        Err(EnvError::MissingConfigError { field }) => assert_eq!(field, SERVER_URL_KEY),
        other => panic!("expected missing config error, got {:?}", other),
    }
    assert_eq!(global::server_url(), None);
    assert!(global::config().is_none());

    let env = MapEnv::new().with(SERVER_URL_KEY, "https://api.example.com");
    let installed = global::init(&env).unwrap();
    assert_eq!(installed.server_url(), "https://api.example.com");

    for _ in 0..3 {
        assert_eq!(global::server_url(), Some("https://api.example.com"));
    }
    assert_eq!(multisweeper_env::server_url(), Some("https://api.example.com"));

    // Later sources are ignored once installed.
    let other = MapEnv::new().with(SERVER_URL_KEY, "https://other.example.com");
    assert_eq!(
        global::init(&other).unwrap().server_url(),
        "https://api.example.com"
    );

    assert!(global::install(PublicConfig::new("https://api.example.com")).is_ok());
    match global::install(PublicConfig::new("https://other.example.com")) {
        Err(EnvError::AlreadyInitialized { existing }) => {
            assert_eq!(existing, "https://api.example.com")
        }
        other => panic!("expected already initialized error, got {:?}", other),
    }
    assert_eq!(global::server_url(), Some("https://api.example.com"));
}
