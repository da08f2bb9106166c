use super::*;

// =============================================================
// Cookie attribute contract
// =============================================================

#[test]
fn default_attrs_expire_after_seven_days() {
    let attrs = CookieAttrs::default();
    assert_eq!(attrs.expiry_days, 7.0);
    assert!(!attrs.secure);
}

#[test]
fn set_cookie_string_carries_expiry_path_and_same_site() {
    let cookie = build_set_cookie("authToken", "tok123", "Mon, 07 Sep 2026 00:00:00 GMT", false);
    assert_eq!(
        cookie,
        "authToken=tok123; Expires=Mon, 07 Sep 2026 00:00:00 GMT; Path=/; SameSite=Lax"
    );
}

#[test]
fn secure_attribute_appended_for_https_origins() {
    let cookie = build_set_cookie("authToken", "tok123", "Mon, 07 Sep 2026 00:00:00 GMT", true);
    assert!(cookie.ends_with("; Secure"));
}

#[test]
fn clear_cookie_string_expires_immediately() {
    assert_eq!(build_clear_cookie("userEmail"), "userEmail=; Max-Age=0; Path=/; SameSite=Lax");
}

// =============================================================
// Cookie header parsing
// =============================================================

#[test]
fn cookie_value_finds_token_among_other_cookies() {
    let header = "theme=dark; authToken=tok123; userEmail=a%40b.com";
    assert_eq!(cookie_value(header, "authToken"), Some("tok123".to_owned()));
}

#[test]
fn cookie_value_missing_or_empty_token_is_none() {
    assert_eq!(cookie_value("theme=dark", "authToken"), None);
    assert_eq!(cookie_value("authToken=; theme=dark", "authToken"), None);
}

#[test]
fn cookie_value_does_not_match_name_prefixes() {
    assert_eq!(cookie_value("authTokenOld=stale", "authToken"), None);
}
