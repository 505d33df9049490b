#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use frontend::components::data_table::{DataTable, TableRow};
use frontend::components::form_field::FormField;
use frontend::components::page_header::PageHeader;
use gloo::utils::document;
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::platform::time::sleep;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

async fn settle() {
    sleep(Duration::from_millis(10)).await;
}

#[derive(Clone, PartialEq)]
struct Team {
    id: u32,
    name: &'static str,
}

impl TableRow for Team {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

#[derive(Properties, PartialEq)]
struct TeamTableProps {
    rows: Vec<Team>,
}

#[function_component(TeamTable)]
fn team_table(props: &TeamTableProps) -> Html {
    let render_row = Callback::from(|team: Team| vec![html! { { team.name } }]);
    html! {
        <DataTable<Team> headers={vec![AttrValue::from("Team")]} rows={props.rows.clone()} {render_row} />
    }
}

#[wasm_bindgen_test]
async fn table_lists_rows_and_count() {
    let root = mount_point();
    let rows = vec![Team { id: 1, name: "Lahore Lions" }, Team { id: 2, name: "Karachi Kings" }];
    yew::Renderer::<TeamTable>::with_root_and_props(root.clone(), TeamTableProps { rows }).render();
    settle().await;

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("Lahore Lions"));
    assert!(text.contains("Karachi Kings"));
    assert!(text.contains("Showing 2 entries"));
}

#[wasm_bindgen_test]
async fn empty_table_says_so() {
    let root = mount_point();
    yew::Renderer::<TeamTable>::with_root_and_props(root.clone(), TeamTableProps { rows: vec![] }).render();
    settle().await;

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("No data found"));
    assert!(text.contains("Showing 0 entries"));
}

#[function_component(EmailField)]
fn email_field() -> Html {
    html! {
        <FormField
            name="email"
            label="Email Address"
            value="not-an-email"
            input_type="email"
            error={Some(AttrValue::from("Please enter a valid email address"))}
            on_change={Callback::noop()}
        />
    }
}

#[wasm_bindgen_test]
async fn form_field_shows_label_and_error() {
    let root = mount_point();
    yew::Renderer::<EmailField>::with_root(root.clone()).render();
    settle().await;

    let input = root.query_selector("input#email").unwrap().expect("input rendered");
    assert_eq!(input.get_attribute("type").as_deref(), Some("email"));
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("Email Address"));
    assert!(text.contains("Please enter a valid email address"));
}

#[function_component(AboutHeader)]
fn about_header() -> Html {
    html! { <PageHeader title="About Us" description={Some(AttrValue::from("Where champions are made"))} /> }
}

#[wasm_bindgen_test]
async fn page_header_without_button_renders_no_button() {
    let root = mount_point();
    yew::Renderer::<AboutHeader>::with_root(root.clone()).render();
    settle().await;

    assert!(root.query_selector("button").unwrap().is_none());
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("About Us"));
    assert!(text.contains("Where champions are made"));
}

#[wasm_bindgen_test]
fn bearer_header_is_attached() {
    use frontend::api::utils::with_bearer;
    use gloo_net::http::Request;

    let request = with_bearer(Request::get("/api/admin/get-all-organizor"), "tok-1")
        .build()
        .unwrap();
    assert_eq!(request.headers().get("Authorization").as_deref(), Some("Bearer tok-1"));
}
