use bru2md::{
    constants::DEFAULT_SEQ,
    parser::{parse, parse_folder_name, Params},
};

const CREATE_PET: &str = r#"meta {
  name: Create pet
  type: http
  seq: 2
}

post {
  url: {{baseUrl}}/owners/:ownerId/pets?verbose=true
  body: json
  auth: none
}

params:query {
  verbose: true
}

params:path {
  ownerId: 7
}

headers {
  Content-Type: application/json
  Authorization: Bearer {{token}}
}

body:json {
  {
    "name": "Rex",
    "tags": ["dog", "good"],
    "owner": {"id": 7}
  }
}
"#;

fn params(entries: &[(&str, &str)]) -> Params {
    entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn with_request(blocks: &str) -> String {
    format!("meta {{\n  name: Test\n  seq: 1\n}}\n\nget {{\n  url: /test\n}}\n\n{blocks}")
}

#[test]
fn test_full_request() {
    let request = parse(CREATE_PET).unwrap();

    assert_eq!(request.name, "Create pet");
    assert_eq!(request.seq, 2);
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "{{baseUrl}}/owners/:ownerId/pets?verbose=true");
    assert_eq!(request.path_params, params(&[("ownerId", "7")]));
    assert_eq!(request.query_params, params(&[("verbose", "true")]));
    assert_eq!(
        request.headers,
        params(&[
            ("Content-Type", "application/json"),
            ("Authorization", "Bearer {{token}}"),
        ])
    );
    assert_eq!(
        request.body,
        "```json\n{\n  \"name\": \"Rex\",\n  \"tags\": [\n    \"dog\",\n    \"good\"\n  ],\n  \"owner\": {\n    \"id\": 7\n  }\n}\n```"
    );
}

#[test]
fn test_minimal_request() {
    let request = parse("meta { name: X\nseq: 3 }\nget { url: /foo }").unwrap();

    assert_eq!(request.name, "X");
    assert_eq!(request.seq, 3);
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "/foo");
    assert!(request.path_params.is_empty());
    assert!(request.query_params.is_empty());
    assert!(request.headers.is_empty());
    assert!(request.body.is_empty());
}

#[test]
fn test_missing_meta_block() {
    assert!(parse("get {\n  url: /foo\n}").is_none());
    assert!(parse("").is_none());
    assert!(parse("{\n  \"name\": \"not a bru file\"\n}").is_none());
}

#[test]
fn test_missing_method_block() {
    let folder = "meta {\n  name: Users\n}\n\nauth {\n  mode: none\n}\n";
    assert!(parse(folder).is_none());
}

#[test]
fn test_defaults() {
    let request = parse("meta {\n  type: http\n}\n\ndelete {\n  body: none\n}").unwrap();

    assert_eq!(request.name, "Unnamed Request");
    assert_eq!(request.seq, DEFAULT_SEQ);
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.url, "No URL found");
}

#[test]
fn test_method_is_case_insensitive() {
    let request = parse("meta {\n  name: a\n}\nPatch {\n  url: /a\n}").unwrap();
    assert_eq!(request.method, "PATCH");
}

#[test]
fn test_first_method_block_wins() {
    let text = "meta {\n  name: a\n}\nhead {\n  url: /first\n}\npost {\n  url: /second\n}";
    let request = parse(text).unwrap();

    assert_eq!(request.method, "HEAD");
    assert_eq!(request.url, "/first");
}

#[test]
fn test_params_keep_declaration_order() {
    let request = parse(&with_request("headers { A: 1\nB: 2 }")).unwrap();

    let entries: Vec<_> = request.headers.iter().collect();
    assert_eq!(
        entries,
        vec![(&"A".to_string(), &"1".to_string()), (&"B".to_string(), &"2".to_string())]
    );
}

#[test]
fn test_params_line_without_colon_is_skipped() {
    let request = parse(&with_request("params:query {\n  page: 1\n  orphan\n  size: 20\n}")).unwrap();

    assert_eq!(request.query_params, params(&[("page", "1"), ("size", "20")]));
}

#[test]
fn test_params_split_on_first_colon() {
    let request =
        parse(&with_request("headers {\n  X-Callback:  http://localhost:8080/hook  \n}")).unwrap();

    assert_eq!(
        request.headers,
        params(&[("X-Callback", "http://localhost:8080/hook")])
    );
}

#[test]
fn test_params_duplicate_key_last_wins() {
    let request = parse(&with_request("headers {\n  A: 1\n  B: 2\n  A: 3\n}")).unwrap();

    let entries: Vec<_> = request.headers.into_iter().collect();
    assert_eq!(
        entries,
        vec![("A".to_string(), "3".to_string()), ("B".to_string(), "2".to_string())]
    );
}

#[test]
fn test_json_body_invalid_falls_back_to_raw() {
    let request = parse(&with_request("body:json {\n  {\"name\": }\n}")).unwrap();

    assert_eq!(request.body, "```\n{\"name\": }\n```");
}

#[test]
fn test_json_body_without_object() {
    let request = parse(&with_request("body:json {\n  [1, 2]\n}")).unwrap();

    assert_eq!(request.body, "```json\n[1, 2]\n```");
}

#[test]
fn test_json_subtype_is_case_insensitive() {
    let request = parse(&with_request("body:JSON {\n  {\"a\":1}\n}")).unwrap();

    assert_eq!(request.body, "```json\n{\n  \"a\": 1\n}\n```");
}

#[test]
fn test_json_body_keeps_large_integers() {
    let request = parse(&with_request("body:json {\n  {\"id\": 12345678901234567890123}\n}")).unwrap();

    assert_eq!(request.body, "```json\n{\n  \"id\": 12345678901234567890123\n}\n```");
}

#[test]
fn test_json_body_with_brace_inside_string() {
    let request =
        parse(&with_request("body:json {\n  {\"tpl\": \"Hello {name\"}\n}\n\ndocs {\n  notes\n}")).unwrap();

    assert_eq!(request.body, "```json\n{\n  \"tpl\": \"Hello {name\"\n}\n```");
}

#[test]
fn test_unclosed_body_ends_at_first_closing_brace() {
    let request = parse(&with_request("body:text {\n  a { b\n}\n")).unwrap();

    assert_eq!(request.body, "```text\na { b\n```");
}

#[test]
fn test_other_body_subtypes() {
    let request = parse(&with_request("body:text {\n  hello world\n}")).unwrap();
    assert_eq!(request.body, "```text\nhello world\n```");

    let request = parse(&with_request(
        "body:graphql {\n  query { pets { name } }\n}\n\nbody:graphql:vars {\n  {}\n}",
    ))
    .unwrap();
    assert_eq!(request.body, "```graphql\nquery { pets { name } }\n```");

    let request =
        parse(&with_request("body:form-urlencoded {\n  name: Rex\n  age: 3\n}")).unwrap();
    assert_eq!(request.body, "```form-urlencoded\nname: Rex\n  age: 3\n```");
}

#[test]
fn test_folder_name() {
    assert_eq!(
        parse_folder_name("meta {\n  name: User Management\n}\n"),
        Some("User Management".to_string())
    );
    assert_eq!(parse_folder_name("meta {\n  name:   \n}\n"), None);
    assert_eq!(parse_folder_name("auth {\n  mode: none\n}\n"), None);
}
