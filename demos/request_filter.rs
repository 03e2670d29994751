//! Request filtering demonstration.
//!
//! This example shows how a handler validates request data:
//! 1. Collect query, body, cookie and session values into a context
//! 2. Read each field through a typed accessor with its constraints
//! 3. Fall back to defaults for anything missing or invalid
//!
//! Run with: `RUST_LOG=debug cargo run --example request_filter`

use input_filter::{Filter, RequestContext, StaticMxResolver};

/// Simulates what a framework integration collects for one request
fn build_context() -> RequestContext {
    let mut ctx = RequestContext::new();
    ctx.add_query_param("page", "3");
    ctx.add_query_param("per_page", "500");
    ctx.add_query_param("sort", "0x10");
    ctx.add_body_field("title", "  <h1>Hello</h1> there ");
    ctx.add_body_field("homepage", "https://igrivi.com/about");
    ctx.add_body_field("email", "Sugi@bulinfo.net");
    ctx.add_body_field("skype", "1nvalid");
    ctx.add_cookie("last_ip", "192.168.0.12");
    ctx.add_session_value("user_id", 42);
    ctx
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // An allowlist keeps the demo off the network
    let filter = Filter::builder()
        .mx_resolver(StaticMxResolver::new(["bulinfo.net"]))
        .build();
    let ctx = build_context();

    println!("=== Query ===");
    println!("page:     {}", filter.int_query(&ctx, "page", Some(1), None, 1_i64));
    println!(
        "per_page: {}",
        filter.int_query(&ctx, "per_page", Some(1), Some(100), 20_i64)
    );
    println!("sort:     {:?}", filter.int_query(&ctx, "sort", None, None, None::<i64>));

    println!("\n=== Body ===");
    println!(
        "title:    {:?}",
        filter.plain_body(&ctx, "title", Some(1), Some(80), None::<String>)
    );
    let homepage = filter.from_body(&ctx, "homepage", "");
    println!("homepage: {:?}", filter.url(homepage, None::<String>));
    let email = filter.from_body(&ctx, "email", "");
    println!("email:    {:?}", filter.email(email, None::<String>, true));
    let skype = filter.from_body(&ctx, "skype", "");
    println!("skype:    {:?}", filter.skype(skype, None::<String>));

    println!("\n=== Cookies ===");
    let last_ip = filter.from_cookies(&ctx, "last_ip", "");
    println!("last_ip:  {:?}", filter.ipv4(last_ip.clone(), None::<String>, false, false));
    println!("  (private allowed): {:?}", filter.ipv4(last_ip, None::<String>, true, false));

    println!("\n=== Session ===");
    println!(
        "user_id:  {:?}",
        filter.int_session(&ctx, "user_id", Some(1), None, None::<i64>)
    );
}
