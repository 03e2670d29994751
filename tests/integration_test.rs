//! End-to-end checks of the public validator contract.

use input_filter::{Filter, StaticMxResolver, Value};

const NO_INT: Option<i64> = None;
const NO_STR: Option<String> = None;

fn filter() -> Filter {
    Filter::builder()
        .mx_resolver(StaticMxResolver::new(["bulinfo.net"]))
        .build()
}

#[test]
fn failures_return_the_default_unchanged() {
    let f = filter();

    // Defaults are not validated: an out-of-range default still comes back.
    assert_eq!(f.int("abc", Some(1), Some(5), 100_i64), 100);
    assert_eq!(f.url("nope", "also nope".to_string()), "also nope");
    assert_eq!(f.skype("x", String::new()), "");
}

#[test]
fn int_out_of_range_fails_for_any_default() {
    let f = filter();

    assert_eq!(f.int(5, Some(2), Some(4), NO_INT), None);
    assert_eq!(f.int(5, Some(2), Some(4), 3_i64), 3);
    assert_eq!(f.int(5, Some(2), Some(4), -1_i64), -1);
}

#[test]
fn int_accepts_every_value_kind_it_can_coerce() {
    let f = filter();

    assert_eq!(f.int(Value::Int(9), None, None, NO_INT), Some(9));
    assert_eq!(f.int(Value::Float(9.0), None, None, NO_INT), Some(9));
    assert_eq!(f.int(Value::from("9"), None, None, NO_INT), Some(9));
    assert_eq!(f.int(Value::Absent, None, None, NO_INT), None);
}

#[test]
fn zero_bounds_are_real_constraints() {
    let f = filter();

    assert_eq!(f.int(-1, Some(0), None, NO_INT), None);
    assert_eq!(f.int(0, Some(0), None, NO_INT), Some(0));
    assert_eq!(f.str("a", None, Some(0), NO_STR), None);
    assert_eq!(f.str("", None, Some(0), NO_STR), Some(String::new()));
}

#[test]
fn str_examples() {
    let f = filter();

    assert_eq!(f.str(" a ", None, None, NO_STR), Some("a".to_string()));
    assert_eq!(f.str("", Some(1), None, NO_STR), None);
    assert_eq!(f.str("ab", Some(1), Some(2), NO_STR), Some("ab".to_string()));
    assert_eq!(f.str(" abc ", Some(1), Some(2), "error".to_string()), "error");
}

#[test]
fn url_examples() {
    let f = filter();

    assert_eq!(f.url("igrivi.com", NO_STR), None);
    assert_eq!(
        f.url("http://igrivi.com", NO_STR),
        Some("http://igrivi.com".to_string())
    );
    assert_eq!(
        f.url("http://somedomain.com:81", NO_STR),
        Some("http://somedomain.com:81".to_string())
    );
    assert_eq!(f.url("http://somedomain.com:6", NO_STR), None);
    assert_eq!(f.url("http://10.10.10.10", NO_STR), None);
    assert_eq!(
        f.url("http://ab.cd?x@12.34", NO_STR),
        Some("http://ab.cd?x@12.34".to_string())
    );
    assert_eq!(
        f.url("http://1.22.333", NO_STR),
        Some("http://1.22.333".to_string())
    );
    assert_eq!(
        f.url("http://президент.рф", NO_STR),
        Some("http://президент.рф".to_string())
    );
}

#[test]
fn email_examples() {
    let f = filter();

    assert_eq!(
        f.email("Sugi@bulinfo.net", NO_STR, false),
        Some("Sugi@bulinfo.net".to_string())
    );
    assert_eq!(
        f.email("tza.ppa@bulinfo.net", NO_STR, false),
        Some("tza.ppa@bulinfo.net".to_string())
    );
    assert_eq!(f.email("Sugi@localhost", NO_STR, false), None);
    assert_eq!(f.email("@localhost", NO_STR, false), None);
    assert_eq!(f.email("t@.c", NO_STR, false), None);
    assert_eq!(f.email("t@abc.c", NO_STR, false), None);
}

#[test]
fn email_mx_check() {
    let f = filter();

    assert_eq!(
        f.email("Sugi@bulinfo.net", NO_STR, true),
        Some("Sugi@bulinfo.net".to_string())
    );
    assert_eq!(f.email("Sugi@igrivi.com", NO_STR, true), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn system_mx_check_inside_async_handler_falls_back_to_default() {
    // Default builder uses the system resolver. `.invalid` never has MX.
    let f = Filter::new();

    assert_eq!(f.email("a@mail.invalid", NO_STR, true), None);
    assert_eq!(
        f.email("a@mail.invalid", NO_STR, false),
        Some("a@mail.invalid".to_string())
    );
}

#[tokio::test(flavor = "current_thread")]
async fn system_mx_check_on_current_thread_runtime_falls_back_to_default() {
    let f = Filter::new();

    assert_eq!(f.email("a@mail.invalid", "fallback".to_string(), true), "fallback");
}

#[test]
fn ipv4_examples() {
    let f = filter();

    assert_eq!(f.ipv4("8.8.8.8", NO_STR, false, false), Some("8.8.8.8".to_string()));
    assert_eq!(f.ipv4("192.168.1.1", NO_STR, false, false), None);
    assert_eq!(
        f.ipv4("192.168.1.1", NO_STR, true, false),
        Some("192.168.1.1".to_string())
    );
    assert_eq!(f.ipv4("0.0.0.0", NO_STR, true, false), None);
    assert_eq!(
        f.ipv4("0.0.0.0", NO_STR, true, true),
        Some("0.0.0.0".to_string())
    );
}

#[test]
fn skype_examples() {
    let f = filter();

    for (name, ok) in [
        ("a.L-a2b,a_la_.,-", true),
        ("fifth", false),
        ("sixty1", true),
        ("1totot", false),
        (".alabala", false),
        ("_alabala", false),
        (",alabala", false),
    ] {
        let expected = ok.then(|| name.to_string());
        assert_eq!(f.skype(name, NO_STR), expected, "skype name {:?}", name);
    }
}

#[test]
fn filter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Filter>();

    let f = filter();
    let handle = std::thread::spawn(move || f.int("3", None, None, NO_INT));
    assert_eq!(handle.join().expect("thread should not panic"), Some(3));
}

#[test]
fn rejections_are_logged_without_panicking() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let f = filter();
    assert_eq!(f.int("nope", None, None, NO_INT), None);
    assert_eq!(f.email("nope", NO_STR, true), None);
}
