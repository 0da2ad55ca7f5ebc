//! Integration tests for the individual field rules

use request_guard::{matches, validate_secret, ValidationError};

const SIXTY_THREE_HEX: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcde";

fn accepts(candidate: &str, rule: &str) -> bool {
    matches(rule, candidate).unwrap()
}

#[test]
fn test_user_name() {
    assert!(accepts("validusername", "user_name"));
    assert!(accepts("user123", "user_name"));
    assert!(!accepts("user.123", "user_name"));
    assert!(!accepts("user-123", "user_name"));
    assert!(!accepts("user_123", "user_name"));
    assert!(!accepts("User123", "user_name")); // uppercase
    assert!(!accepts("user!@#", "user_name"));
    assert!(!accepts("ab", "user_name")); // too short
    assert!(!accepts("thisusernameiswaytoolong", "user_name"));
}

#[test]
fn test_app_name() {
    assert!(accepts("validappname", "app_name"));
    assert!(accepts("app123", "app_name"));
    assert!(accepts("app-123", "app_name"));
    assert!(!accepts("app_123", "app_name"));
    assert!(!accepts("app.123", "app_name"));
    assert!(!accepts("InvalidAppName", "app_name"));
    assert!(!accepts("app!@#", "app_name"));
    assert!(!accepts("ap", "app_name"));
    assert!(!accepts("thisappnameiswaytoolong", "app_name"));
}

#[test]
fn test_version_name() {
    assert!(accepts("valid.versionname", "version_name"));
    assert!(accepts("version123", "version_name"));
    assert!(accepts("version.name123", "version_name"));
    assert!(!accepts("version_name123", "version_name"));
    assert!(!accepts("invalid.versionname!", "version_name"));
    assert!(!accepts("ta", "version_name"));
    assert!(!accepts("this.versionname.is.way.too.long", "version_name"));
}

#[test]
fn test_password() {
    assert!(accepts("validpassword._-", "password"));
    assert!(!accepts("validpassword!", "password"));
    assert!(accepts("valid_pass123", "password"));
    assert!(accepts("MixedCasePassword", "password"));
    assert!(!accepts("valid!@#", "password"));
    assert!(!accepts("1234567", "password")); // too short
    assert!(accepts("12345678", "password"));
    assert!(!accepts("thispasswordiswaytoolong_xxxxx!", "password"));
    assert!(!accepts(&"a".repeat(31), "password"));
}

#[test]
fn test_email() {
    assert!(accepts("admin@admin.com", "email"));
    assert!(!accepts("@admin.com", "email"));
    assert!(!accepts("admin@.com", "email"));
    assert!(!accepts("admin@admin.", "email"));
    assert!(!accepts("adminadmin.com", "email"));
    assert!(!accepts("admin@admincom", "email"));

    let thirty = "abcdefghijklmnopqrstuvwxyz1234";
    assert!(accepts(&format!("{}@{}.de", thirty, thirty), "email"));
    assert!(!accepts(&format!("{}@{}.com", thirty, thirty), "email"));
}

#[test]
fn test_number() {
    assert!(accepts("0", "number"));
    assert!(accepts("1", "number"));
    for bad in ["-1", "a", "A", "z", "Z", "-", "_", ".", ",", ""] {
        assert!(!accepts(bad, "number"), "{:?} accepted as number", bad);
    }

    let twenty_digits = "01234567890123456789";
    assert!(accepts(twenty_digits, "number"));
    assert!(!accepts(&format!("{}0", twenty_digits), "number"));
}

#[test]
fn test_search_term() {
    assert!(accepts("", "search_term"));
    assert!(accepts("a", "search_term"));
    assert!(accepts("1", "search_term"));
    assert!(accepts("0123456789abcdefghij", "search_term"));
    assert!(!accepts("0123456789abcdefghijk", "search_term"));
    assert!(!accepts("asdf!", "search_term"));
}

#[test]
fn test_host() {
    assert!(accepts("localhost", "host"));
    assert!(accepts("localhost123", "host"));
    assert!(accepts("example.com", "host"));
    assert!(accepts("my_example-website.com", "host"));
    assert!(accepts("127.0.0.1:8080", "host"));
    assert!(accepts("a.", "host"));
    assert!(accepts("", "host"));
    assert!(accepts(&format!("{}a", SIXTY_THREE_HEX), "host"));
    assert!(!accepts(&format!("{}ab", SIXTY_THREE_HEX), "host"));
}

#[test]
fn test_known_hosts() {
    let sample = "# 127.0.0.1:2222 SSH-2.0-OpenSSH_9.9\n\
        [127.0.0.1]:2222 ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABgQClESlJkZf90J0vZZNdAdvl4SpUDt+/VWpiMR8CYbGal8uu09a7UMP9hTeoPacrJtxXRooll7YWv8QRY+/c6UkZHaU4LCOwDJAATHVvKv1ynaGBzGbWK4sGSyTxuzyTYCzcqc1dO+te8qbHh6MI3mC5fF7U=\n\
        # 127.0.0.1:2222 SSH-2.0-OpenSSH_9.9\n\
        [127.0.0.1]:2222 ecdsa-sha2-nistp256 AAAAE2VjZHNhLXNoYTItbmlzdHAyNTYAAAAIbmlzdHAyNTYAAABBBLO699LJQo4+GPThGkZ12YP10xfcf6Zn17nLKi85M1b4wBcb9iaBSLeRAMdszf41pWbW1BHlvXBUkfVbSaiqqh0=\n\
        [127.0.0.1]:2222 ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIERZ7A/6JHp/4VSE3iKJGPWSV6SnYVfzGGamyHwYDsj4\r\n";
    assert!(accepts(sample, "known_hosts"));
    assert!(!accepts(&format!("{}!", sample), "known_hosts"));
}

#[test]
fn test_restic_backup_id() {
    let sample = "06b6458017d1e653195d696653c358e4e6a78772aed17582dd6539287332621f";
    assert!(accepts(sample, "restic_backup_id"));
    assert!(accepts(&format!("{}a", SIXTY_THREE_HEX), "restic_backup_id"));
    assert!(!accepts(&format!("{}a", sample), "restic_backup_id"));
    assert!(!accepts(&format!("{}g", SIXTY_THREE_HEX), "restic_backup_id"));
}

#[test]
fn test_secret() {
    let token = "06b6458017d1e653195d696653c358e4e6a78772aed17582dd6539287332621f";
    assert!(validate_secret(token));
    assert!(!validate_secret(&format!("{}0", token)));
    assert!(!validate_secret(&token[..63]));
    assert!(!validate_secret(&token.to_uppercase()));
}

#[test]
fn test_unknown_rule_is_an_error() {
    assert_eq!(
        matches("unknown-type", "anything"),
        Err(ValidationError::UnknownRule("unknown-type".to_string()))
    );
    assert!(matches("secret", "anything").is_err());
}
