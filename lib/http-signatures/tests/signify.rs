use http::{HeaderValue, Method, Request};
use http_signatures::{
    content_digest::{self, Padding},
    crypto::VerifyError,
    signify::{
        self, component, easy, signature_base, Error, SignatureFormat, SignatureInput, Signer,
        SigningConfiguration, DEFAULT_COMPONENTS, LABEL,
    },
    ORIGIN_DATE_HEADER, SIGNATURE_HEADER, SIGNATURE_INPUT_HEADER,
};
use pretty_assertions::assert_eq;
use proptest::{prop_assert_eq, proptest};
use time::{Duration, OffsetDateTime};


fn created() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(self::data::CREATED).unwrap()
}

fn signer() -> Signer<http_signatures::ring::signature::Ed25519KeyPair> {
    Signer::builder()
        .key_id(self::data::KEY_ID)
        .key(self::data::get_private_key())
        .build()
        .unwrap()
}

fn header<B>(request: &Request<B>, name: &http::HeaderName) -> String {
    request.headers()[name].to_str().unwrap().to_string()
}

#[test]
fn resolve_components() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("origin-date", "2021-04-20T20:21:15Z")
        .header("signify-resource", "public")
        .body(())
        .unwrap();

    let values = DEFAULT_COMPONENTS
        .iter()
        .map(|name| component::resolve(name, &request).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(values, ["GET", "/", "2021-04-20T20:21:15Z", "public"]);
}

#[test]
fn signature_input_literal() {
    let input = SignatureInput {
        label: LABEL,
        components: DEFAULT_COMPONENTS.to_vec(),
        created: 1_618_884_475,
        key_id: "public",
        algorithm: None,
    };

    assert_eq!(
        input.to_string(),
        r#"signify=("@method", "@path", "origin-date", "signify-resource");created=1618884475;keyid="public""#
    );
}

#[test]
fn signature_base_layout() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("origin-date", "2021-04-20T20:21:15Z")
        .header("signify-resource", "public")
        .body(())
        .unwrap();
    let input = SignatureInput {
        label: LABEL,
        components: DEFAULT_COMPONENTS.to_vec(),
        created: 1_618_884_475,
        key_id: "public",
        algorithm: None,
    };

    assert_eq!(
        signature_base::signature_base(&input, &request).unwrap(),
        "@method: GET\n\
         @path: /\n\
         origin-date: 2021-04-20T20:21:15Z\n\
         signify-resource: public\n\
         signify=(\"@method\", \"@path\", \"origin-date\", \"signify-resource\");created=1618884475;keyid=\"public\""
    );
}

#[test]
fn sign_known_vector() {
    let mut request = self::data::get_request();
    signer().sign_at(&mut request, created()).unwrap();

    assert_eq!(
        header(&request, &ORIGIN_DATE_HEADER),
        "2021-04-20T20:21:15Z"
    );
    assert_eq!(
        header(&request, &SIGNATURE_INPUT_HEADER),
        format!(
            r#"signify=("@method", "@path", "origin-date", "signify-resource");created={};keyid="{}""#,
            self::data::CREATED,
            self::data::KEY_ID
        )
    );
    assert_eq!(
        header(&request, &SIGNATURE_HEADER),
        format!(r#"indexed="?0;signify="{}"#, self::data::SIGNATURE)
    );
}

#[test]
fn sign_truncates_to_seconds() {
    let mut request = self::data::get_request();
    signer()
        .sign_at(&mut request, created() + Duration::milliseconds(750))
        .unwrap();

    assert_eq!(
        header(&request, &SIGNATURE_HEADER),
        format!(r#"indexed="?0;signify="{}"#, self::data::SIGNATURE)
    );
}

#[test]
fn sign_overwrites_origin_date() {
    let mut request = self::data::get_request();
    request.headers_mut().insert(
        &ORIGIN_DATE_HEADER,
        HeaderValue::from_static("1970-01-01T00:00:00Z"),
    );
    signer().sign_at(&mut request, created()).unwrap();

    assert_eq!(request.headers().get_all(&ORIGIN_DATE_HEADER).iter().count(), 1);
    assert_eq!(
        header(&request, &SIGNATURE_HEADER),
        format!(r#"indexed="?0;signify="{}"#, self::data::SIGNATURE)
    );
}

#[test]
fn sign_without_components() {
    let signer = Signer::builder()
        .components(Vec::<String>::new())
        .key_id(self::data::KEY_ID)
        .key(self::data::get_private_key())
        .build()
        .unwrap();

    let mut request = self::data::get_request();
    signer.sign_at(&mut request, created()).unwrap();

    assert_eq!(
        header(&request, &SIGNATURE_INPUT_HEADER),
        format!(
            r#"signify=();created={};keyid="{}""#,
            self::data::CREATED,
            self::data::KEY_ID
        )
    );
    assert_eq!(
        header(&request, &SIGNATURE_HEADER),
        format!(r#"indexed="?0;signify="{}"#, self::data::EMPTY_SIGNATURE)
    );
    assert_eq!(signify::verify(&request).unwrap(), self::data::KEY_ID);
}

#[test]
fn sign_verify() {
    let mut request = self::data::get_request();
    signer().sign(&mut request).unwrap();

    assert_eq!(signify::verify(&request).unwrap(), self::data::KEY_ID);
}

#[test]
fn tampered_header() {
    let mut request = self::data::get_request();
    signer().sign(&mut request).unwrap();

    request.headers_mut().insert(
        "signify-resource",
        HeaderValue::from_static("BAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
    );

    assert!(matches!(
        signify::verify(&request),
        Err(Error::Verify(VerifyError::Verification))
    ));
}

#[test]
fn tampered_method() {
    let mut request = self::data::get_request();
    signer().sign(&mut request).unwrap();
    *request.method_mut() = Method::DELETE;

    assert!(matches!(
        signify::verify(&request),
        Err(Error::Verify(VerifyError::Verification))
    ));
}

#[test]
fn unknown_pseudo_header() {
    let signer = Signer::builder()
        .components(["@method", "@status"])
        .key_id(self::data::KEY_ID)
        .key(self::data::get_private_key())
        .build()
        .unwrap();

    let mut request = self::data::get_request();
    let result = signer.sign_at(&mut request, created());

    assert!(matches!(
        result,
        Err(Error::Component(component::Error::UnknownPseudoHeader(ref name))) if name == "@status"
    ));
    assert!(request.headers().contains_key(&ORIGIN_DATE_HEADER));
    assert!(!request.headers().contains_key(&SIGNATURE_HEADER));
}

#[test]
fn structured_format_with_algorithm() {
    let signer = Signer::builder()
        .components(["@method", "@target-uri", "@query", "content-type"])
        .key_id(self::data::KEY_ID)
        .key(self::data::get_private_key())
        .format(SignatureFormat::Structured)
        .include_algorithm(true)
        .build()
        .unwrap();

    let mut request = self::data::post_request("{}");
    signer.sign_at(&mut request, created()).unwrap();

    let signature_input = header(&request, &SIGNATURE_INPUT_HEADER);
    assert!(signature_input.ends_with(r#";alg="ed25519""#));

    let signature = header(&request, &SIGNATURE_HEADER);
    assert!(signature.starts_with(r#"indexed="?0";signify=:0B"#));
    assert!(signature.ends_with(':'));

    assert_eq!(signify::verify(&request).unwrap(), self::data::KEY_ID);
}

#[test]
fn missing_headers() {
    let request = self::data::get_request();
    assert!(matches!(
        signify::verify(&request),
        Err(Error::MissingSignatureInputHeader)
    ));

    let mut request = self::data::get_request();
    signer().sign(&mut request).unwrap();
    request.headers_mut().remove(&SIGNATURE_HEADER);
    assert!(matches!(
        signify::verify(&request),
        Err(Error::MissingSignatureHeader)
    ));

    let mut request = self::data::get_request();
    signer().sign(&mut request).unwrap();
    request.headers_mut().insert(
        &SIGNATURE_HEADER,
        HeaderValue::from_static(r#"indexed="?0";other=:0BAAAA:"#),
    );
    assert!(matches!(
        signify::verify(&request),
        Err(Error::InvalidSignatureHeader)
    ));
}

#[test]
fn unsupported_key_id() {
    let mut request = self::data::get_request();
    signer().sign(&mut request).unwrap();

    let signature_input = header(&request, &SIGNATURE_INPUT_HEADER).replace(
        self::data::KEY_ID,
        "EAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    );
    request.headers_mut().insert(
        &SIGNATURE_INPUT_HEADER,
        HeaderValue::from_str(&signature_input).unwrap(),
    );

    assert!(matches!(signify::verify(&request), Err(Error::KeyParse(..))));
}

#[test]
fn prepare_request() {
    let config = SigningConfiguration::default();
    let key = self::data::get_private_key();

    let request = easy::prepare_request(
        self::data::post_request(r#"{"name":"alice"}"#),
        self::data::KEY_ID,
        &key,
        &config,
    )
    .unwrap();

    assert_eq!(
        header(&request, &http_signatures::SIGNIFY_RESOURCE_HEADER),
        self::data::KEY_ID
    );
    assert!(content_digest::verify(
        request.headers(),
        request.body().as_bytes(),
        Padding::Padded
    )
    .is_ok());
    assert_eq!(signify::verify(&request).unwrap(), self::data::KEY_ID);
}

#[test]
fn prepare_request_twice() {
    let config = SigningConfiguration::default();
    let key = self::data::get_private_key();

    let request = easy::prepare_request(
        self::data::post_request("{}"),
        self::data::KEY_ID,
        &key,
        &config,
    )
    .unwrap();

    assert!(matches!(
        easy::prepare_request(request, self::data::KEY_ID, &key, &config),
        Err(easy::Error::Digest(content_digest::Error::AlreadySet))
    ));
}

#[test]
fn configuration() {
    let config: SigningConfiguration = toml::from_str(
        r#"
        components = ["@method", "@path", "content-digest", "origin-date"]
        digest-algorithm = "sha-512"
        digest-padding = "unpadded"
        signature-format = "structured"
        include-algorithm = true
        "#,
    )
    .unwrap();

    assert_eq!(
        config.components,
        ["@method", "@path", "content-digest", "origin-date"]
    );
    assert_eq!(config.digest_algorithm, content_digest::Algorithm::Sha512);
    assert_eq!(config.digest_padding, Padding::Unpadded);
    assert_eq!(config.signature_format, SignatureFormat::Structured);
    assert!(config.include_algorithm);

    let key = self::data::get_private_key();
    let request = easy::prepare_request(
        self::data::post_request("{}"),
        self::data::KEY_ID,
        &key,
        &config,
    )
    .unwrap();

    assert!(header(&request, &content_digest::CONTENT_DIGEST).starts_with("sha-512=:"));
    assert_eq!(signify::verify(&request).unwrap(), self::data::KEY_ID);
}

#[test]
fn default_configuration() {
    let config: SigningConfiguration = toml::from_str("").unwrap();
    assert_eq!(config, SigningConfiguration::default());
    assert_eq!(config.components, DEFAULT_COMPONENTS);
}

proptest! {
    #[test]
    fn any_header_value_verifies(value in "[a-zA-Z0-9_.-][a-zA-Z0-9 _.-]{0,30}[a-zA-Z0-9_.-]") {
        let signer = Signer::builder()
            .components(["@method", "@path", "origin-date", "x-custom"])
            .key_id(self::data::KEY_ID)
            .key(self::data::get_private_key())
            .build()
            .unwrap();

        let mut request = self::data::get_request();
        request
            .headers_mut()
            .insert("x-custom", HeaderValue::from_str(&value).unwrap());
        signer.sign(&mut request).unwrap();

        prop_assert_eq!(signify::verify(&request).unwrap(), self::data::KEY_ID);
    }
}
