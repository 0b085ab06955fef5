//! Tests en navegador: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use storefront_widgets::config::AppConfig;
use storefront_widgets::dom::{document, get_data_attribute, has_class, text_content, window};
use storefront_widgets::models::UserState;
use storefront_widgets::services::read_session_context;
use storefront_widgets::{init_cart_controls, init_cart_controls_with, init_countdown, init_countdown_with};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlDocument};

wasm_bindgen_test_configure!(run_in_browser);

const EXPIRED_COOKIE: &str = "csrftoken=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/";

fn mount(html: &str) -> Result<Element, JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let root = doc.create_element("div")?;
    root.set_inner_html(html);
    doc.document_element()
        .ok_or_else(|| JsValue::from_str("No root element"))?
        .append_child(&root)?;
    Ok(root)
}

fn by_id(id: &str) -> Element {
    document().and_then(|d| d.get_element_by_id(id)).unwrap()
}

fn set_global(name: &str, value: &JsValue) {
    js_sys::Reflect::set(&window().unwrap(), &JsValue::from_str(name), value).unwrap();
}

fn clear_global(name: &str) {
    js_sys::Reflect::delete_property(&window().unwrap().into(), &JsValue::from_str(name)).unwrap();
}

fn set_cookie(cookie: &str) {
    document()
        .unwrap()
        .dyn_into::<HtmlDocument>()
        .unwrap()
        .set_cookie(cookie)
        .unwrap();
}

const CART_MARKUP: &str = r#"<span id="cart-icon"></span><span id="cart-total">3</span>
    <button id="b1" class="update-cart" data-product="1" data-action="add"></button>
    <button id="b2" class="update-cart" data-product="2" data-action="remove"></button>"#;

#[wasm_bindgen_test]
fn anonymous_visitor_sees_no_cart_controls() {
    let root = mount(CART_MARKUP).unwrap();

    init_cart_controls_with("AnonymousUser".to_string(), "tok".to_string()).unwrap();

    for id in ["cart-icon", "cart-total", "b1", "b2"] {
        assert!(has_class(&by_id(id), "hidden"), "#{} should be hidden", id);
    }
    assert_eq!(get_data_attribute(&by_id("b1"), "product").as_deref(), Some("1"));
    root.remove();
}

#[wasm_bindgen_test]
fn authenticated_user_keeps_controls_visible() {
    let root = mount(
        r#"<span id="cart-icon"></span><span id="cart-total">0</span>
           <button id="b3" class="update-cart" data-product="3" data-action="add"></button>"#,
    )
    .unwrap();

    init_cart_controls_with("maria".to_string(), "tok".to_string()).unwrap();

    assert!(!has_class(&by_id("b3"), "hidden"));
    assert!(!has_class(&by_id("cart-icon"), "hidden"));
    root.remove();
}

#[wasm_bindgen_test]
fn page_globals_drive_cart_setup() {
    let root = mount(CART_MARKUP).unwrap();

    clear_global("user");
    set_global("csrftoken", &JsValue::from_str("tok"));
    assert!(init_cart_controls().is_err());
    assert!(!has_class(&by_id("b1"), "hidden"));

    set_global("user", &JsValue::from_str("AnonymousUser"));
    init_cart_controls().unwrap();
    for id in ["cart-icon", "cart-total", "b1", "b2"] {
        assert!(has_class(&by_id(id), "hidden"), "#{} should be hidden", id);
    }

    clear_global("user");
    clear_global("csrftoken");
    root.remove();
}

#[wasm_bindgen_test]
fn csrf_token_falls_back_to_cookie() {
    let config = AppConfig::default();
    set_global("user", &JsValue::from_str("maria"));
    clear_global("csrftoken");

    set_cookie("csrftoken=fromcookie; path=/");
    let session = read_session_context(&config).unwrap();
    assert_eq!(session.csrf_token, "fromcookie");
    assert_eq!(session.user, UserState::Authenticated("maria".to_string()));

    set_global("csrftoken", &JsValue::from_str("fromglobal"));
    assert_eq!(read_session_context(&config).unwrap().csrf_token, "fromglobal");

    clear_global("csrftoken");
    set_cookie(EXPIRED_COOKIE);
    assert_eq!(read_session_context(&config).unwrap().csrf_token, "");

    clear_global("user");
}

#[wasm_bindgen_test]
fn non_string_user_global_compares_by_text() {
    let config = AppConfig::default();
    set_global("csrftoken", &JsValue::from_str("tok"));

    set_global("user", &JsValue::from_f64(42.0));
    assert_eq!(
        read_session_context(&config).unwrap().user,
        UserState::Authenticated("42".to_string())
    );

    set_global("user", &JsValue::NULL);
    assert!(read_session_context(&config).is_err());

    clear_global("user");
    clear_global("csrftoken");
}

#[wasm_bindgen_test]
fn countdown_without_event_box_fails_init() {
    assert!(init_countdown().is_err());
}

#[wasm_bindgen_test]
fn countdown_without_countdown_box_fails_init() {
    let root = mount(r#"<p id="event-box">1615291380</p>"#).unwrap();

    assert!(init_countdown().is_err());
    assert!(init_countdown_with("1615291380".to_string()).is_err());
    root.remove();
}

#[wasm_bindgen_test]
async fn expired_auction_shows_ended_message() {
    let root = mount(r#"<p id="countdown-box"></p>"#).unwrap();

    init_countdown_with("1615291380".to_string()).unwrap();
    TimeoutFuture::new(1_200).await;

    assert_eq!(text_content(&by_id("countdown-box")), "Auction Ended");
    root.remove();
}
