//! Property tests for the encode / resolve / interpret contract.

use proptest::prelude::*;
use protocol_handler::protocol::{
    codec, get_data, get_url, Payload, RenderQuery, Resolver, Scheme,
};
use serde_json::{Map, Value};

fn resolver() -> Resolver {
    Resolver::new(Scheme::default(), "http://localhost:3000")
}

fn query_of(resolved: &str) -> RenderQuery {
    RenderQuery::from_raw(resolved.split_once('?').map(|(_, q)| q))
}

/// Activated URLs in the registered scheme: any letter case, an opaque host,
/// and optional path, query and fragment that may carry non-ASCII text.
fn protocol_url() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["web+foo", "WEB+FOO", "Web+Foo"]),
        "[a-zA-Z0-9=_-]{1,24}",
        "(/[a-zA-Z0-9éü中文-]{0,8}){0,2}",
        prop::option::of("[a-z0-9=&é]{0,8}"),
        prop::option::of("[a-zA-Z0-9ß]{0,6}"),
    )
        .prop_map(|(scheme, host, path, query, fragment)| {
            let mut url = format!("{}://{}{}", scheme, host, path);
            if let Some(query) = query {
                url.push('?');
                url.push_str(&query);
            }
            if let Some(fragment) = fragment {
                url.push('#');
                url.push_str(&fragment);
            }
            url
        })
}

proptest! {
    #[test]
    fn decode_inverts_encode(s in any::<String>()) {
        prop_assert_eq!(codec::decode(&codec::encode(&s)).unwrap(), s);
    }

    #[test]
    fn encoding_is_hostname_safe(s in any::<String>()) {
        let encoded = codec::encode(&s);
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '=')));
    }

    #[test]
    fn distinct_payloads_get_distinct_hostnames(a in any::<String>(), b in any::<String>()) {
        prop_assume!(a != b);
        prop_assert_ne!(codec::encode(&a), codec::encode(&b));
    }

    #[test]
    fn resolution_is_injective(a in protocol_url(), b in protocol_url()) {
        prop_assume!(a != b);
        let r = resolver();
        let ra = r.resolve(&a).unwrap();
        let rb = r.resolve(&b).unwrap();
        prop_assert_ne!(ra, rb);
    }

    #[test]
    fn resolution_keeps_the_activated_text(url in protocol_url()) {
        let resolved = resolver().resolve(&url).unwrap();
        let got = get_url(&query_of(resolved.as_str()));
        prop_assert_eq!(got.as_deref(), Some(url.as_str()));
    }

    #[test]
    fn interpretation_inverts_resolution(
        fields in prop::collection::btree_map("[a-zA-Z]{1,8}", ".{0,16}", 0..5)
    ) {
        let map: Map<String, Value> = fields
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        let payload = Payload::new(map.clone());
        let url = payload.to_protocol_url(&Scheme::default());

        let resolved = resolver().resolve(url.as_str()).unwrap();
        let query = query_of(resolved.as_str());

        let got = get_url(&query);
        prop_assert_eq!(got.as_deref(), Some(url.as_str()));
        let data = get_data(&query).unwrap();
        prop_assert_eq!(data.value(), &Value::Object(map));
    }
}

#[test]
fn sample_hostname_decodes_to_published_block() {
    let url = "web+foo://eyJwdWJsaXNoZWRCbG9ja0lkIjoibXktdXVpZC1nb2VzLWhlcmUifQ==";
    let query = RenderQuery::with_request(codec::encode(url));
    let data = get_data(&query).unwrap();
    assert_eq!(data.value()["publishedBlockId"], "my-uuid-goes-here");
}
