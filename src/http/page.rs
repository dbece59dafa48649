//! Render page.
//!
//! Always answers `200 text/html`. The two registration actions are always
//! present; the `URL` and `Data` panels appear only when the request carries
//! something decodable.

use axum::{
    extract::{RawQuery, State},
    response::Html,
};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::protocol::registration::{BIND_ACTION, UNBIND_ACTION};
use crate::protocol::{interpret, Interpretation, RegistrationDirective, RenderQuery};

pub const PAGE_TITLE: &str = "Custom Protocol Handler";

pub async fn render_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let view = interpret(&RenderQuery::from_raw(query.as_deref()));

    tracing::debug!(
        url_panel = view.url.is_some(),
        data_panel = view.data.is_some(),
        "Rendering page"
    );
    metrics::record_render(view.url.is_some(), view.data.is_some());

    Html(render_page(&state.directive, &view))
}

/// Wrap a value in `<pre>` with an optional `<h4>` header. Absent or empty
/// values contribute nothing.
pub fn show(header: Option<&str>, value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => {
            let header = header
                .map(|h| format!("<h4>{}</h4>", escape_html(h)))
                .unwrap_or_default();
            format!("{}<pre>{}</pre>", header, escape_html(value))
        }
        _ => String::new(),
    }
}

pub fn render_page(directive: &RegistrationDirective, view: &Interpretation) -> String {
    let url_panel = show(Some("URL"), view.url.as_deref());
    let data_panel = show(Some("Data"), view.data.as_ref().map(|d| d.as_str()));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta http-equiv="X-UA-Compatible" content="IE=edge" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <script>
{script}
    </script>
  </head>
  <body>
    <button onclick="{bind}()">Register Handler</button>
    <button onclick="{unbind}()">Unregister Handler</button>
    <br/>
    {url_panel}
    {data_panel}
  </body>
</html>
"#,
        title = PAGE_TITLE,
        script = directive.script(),
        bind = BIND_ACTION,
        unbind = UNBIND_ACTION,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
