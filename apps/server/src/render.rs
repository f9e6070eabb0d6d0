//! Page rendering for the HTML surface.
//!
//! A [`PageRenderer`] is built once at startup and shared through `AppState`.
//! Templates are plain HTML with `{{name}}` placeholders; every placeholder
//! must be supplied at render time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fxconvert_core::conversion::{ConversionBatch, ConversionOutcome, ConversionResult};
use fxconvert_core::currencies::main_currencies;
use thiserror::Error;

pub const VIEW_TEMPLATE: &str = "view";
pub const RESULT_TEMPLATE: &str = "result";

const EMBEDDED_VIEW: &str = include_str!("../templates/view.html");
const EMBEDDED_RESULT: &str = include_str!("../templates/result.html");

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template '{0}' is not loaded")]
    MissingTemplate(String),
    #[error("Template '{template}' uses unknown placeholder '{name}'")]
    UnknownPlaceholder { template: String, name: String },
    #[error("Template '{0}' has an unterminated placeholder")]
    Unterminated(String),
    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Values echoed back into the input form.
#[derive(Debug, Default, Clone)]
pub struct FormValues<'a> {
    pub amount: &'a str,
    pub currency1: &'a str,
    pub currency2: &'a str,
    pub all_currencies: bool,
}

pub struct PageRenderer {
    templates: HashMap<&'static str, String>,
}

impl PageRenderer {
    /// Renderer using the templates compiled into the binary.
    pub fn embedded() -> Self {
        let templates = HashMap::from([
            (VIEW_TEMPLATE, EMBEDDED_VIEW.to_string()),
            (RESULT_TEMPLATE, EMBEDDED_RESULT.to_string()),
        ]);
        Self { templates }
    }

    /// Loads `view.html` and `result.html` from `dir`, or the embedded
    /// templates when no directory is configured.
    pub fn load(dir: Option<&Path>) -> Result<Self, RenderError> {
        let Some(dir) = dir else {
            return Ok(Self::embedded());
        };

        let mut templates = HashMap::new();
        for name in [VIEW_TEMPLATE, RESULT_TEMPLATE] {
            let path = dir.join(format!("{}.html", name));
            let source = std::fs::read_to_string(&path)
                .map_err(|source| RenderError::Io { path, source })?;
            templates.insert(name, source);
        }
        tracing::info!("Loaded page templates from {}", dir.display());
        Ok(Self { templates })
    }

    pub fn render_view(
        &self,
        form: &FormValues<'_>,
        error: Option<&str>,
    ) -> Result<String, RenderError> {
        let error_html = error
            .map(|msg| format!(r#"<p class="error">{}</p>"#, escape_html(msg)))
            .unwrap_or_default();
        let checked = if form.all_currencies { "checked" } else { "" };

        self.render(
            VIEW_TEMPLATE,
            &[
                ("error", error_html),
                ("amount", escape_html(form.amount)),
                ("currency1", escape_html(form.currency1)),
                ("currency2", escape_html(form.currency2)),
                ("all_checked", checked.to_string()),
                ("main_currencies", main_currency_list()),
            ],
        )
    }

    pub fn render_single(&self, result: &ConversionResult) -> Result<String, RenderError> {
        let request = &result.request;
        let heading = format!(
            "{} {} to {}",
            request.amount.normalize(),
            request.source,
            request.target
        );
        self.render(
            RESULT_TEMPLATE,
            &[
                ("title", "Converted".to_string()),
                ("heading", escape_html(&heading)),
                ("results", outcome_html(&result.outcome)),
            ],
        )
    }

    pub fn render_batch(&self, batch: &ConversionBatch) -> Result<String, RenderError> {
        let heading = format!(
            "{} {} in the main currencies",
            batch.amount.normalize(),
            batch.source
        );

        let rows: String = batch
            .results
            .iter()
            .map(|result| {
                format!(
                    "<tr><th>{}</th><td>{}</td></tr>",
                    escape_html(result.target().code()),
                    outcome_html(&result.outcome)
                )
            })
            .collect();
        let table = format!(r#"<table class="batch">{}</table>"#, rows);

        self.render(
            RESULT_TEMPLATE,
            &[
                ("title", "All currencies".to_string()),
                ("heading", escape_html(&heading)),
                ("results", table),
            ],
        )
    }

    /// Substitutes `{{name}}` placeholders with already-escaped HTML values.
    fn render(&self, template: &str, values: &[(&str, String)]) -> Result<String, RenderError> {
        let source = self
            .templates
            .get(template)
            .ok_or_else(|| RenderError::MissingTemplate(template.to_string()))?;

        let mut out = String::with_capacity(source.len());
        let mut rest = source.as_str();
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| RenderError::Unterminated(template.to_string()))?;
            let name = after[..end].trim();
            let value = values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value)
                .ok_or_else(|| RenderError::UnknownPlaceholder {
                    template: template.to_string(),
                    name: name.to_string(),
                })?;
            out.push_str(value);
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

fn outcome_html(outcome: &ConversionOutcome) -> String {
    match outcome {
        ConversionOutcome::Success { payload } => format!(
            r#"<pre class="payload">{}</pre>"#,
            escape_html(&payload.to_text_lossy())
        ),
        ConversionOutcome::Failure { reason } => {
            format!(r#"<p class="error">{}</p>"#, escape_html(reason))
        }
    }
}

fn main_currency_list() -> String {
    main_currencies()
        .iter()
        .map(|c| format!("<li>{}</li>", escape_html(c.code())))
        .collect()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxconvert_core::{ConversionPayload, ConversionRequest, Currency};
    use rust_decimal_macros::dec;

    fn renderer_with(template: &str) -> PageRenderer {
        PageRenderer {
            templates: HashMap::from([(RESULT_TEMPLATE, template.to_string())]),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"1 & 2"</b>'"#),
            "&lt;b&gt;&quot;1 &amp; 2&quot;&lt;/b&gt;&#x27;"
        );
    }

    #[test]
    fn substitutes_placeholders() {
        let renderer = renderer_with("<h1>{{ title }}</h1>{{heading}}{{results}}");
        let out = renderer
            .render(
                RESULT_TEMPLATE,
                &[
                    ("title", "T".to_string()),
                    ("heading", "H".to_string()),
                    ("results", "R".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(out, "<h1>T</h1>HR");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let renderer = renderer_with("{{nope}}");
        let err = renderer.render(RESULT_TEMPLATE, &[]).unwrap_err();
        assert!(matches!(err, RenderError::UnknownPlaceholder { name, .. } if name == "nope"));
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let renderer = renderer_with("<p>{{title</p>");
        let err = renderer
            .render(RESULT_TEMPLATE, &[("title", String::new())])
            .unwrap_err();
        assert!(matches!(err, RenderError::Unterminated(_)));
    }

    #[test]
    fn missing_template_is_an_error() {
        let renderer = renderer_with("");
        let err = renderer
            .render_view(&FormValues::default(), None)
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingTemplate(name) if name == VIEW_TEMPLATE));
    }

    #[test]
    fn embedded_view_lists_main_currencies() {
        let html = PageRenderer::embedded()
            .render_view(&FormValues::default(), Some("Invalid amount: <x>"))
            .unwrap();
        for code in ["USD", "CAD", "CNY", "EUR", "GBP", "JPY"] {
            assert!(html.contains(&format!("<li>{}</li>", code)));
        }
        assert!(html.contains("Invalid amount: &lt;x&gt;"));
        assert!(html.contains(r#"name="allCurrencies""#));
    }

    #[test]
    fn batch_rows_follow_batch_order() {
        let request = |code: &'static str| {
            ConversionRequest::new(Currency::new("USD"), Currency::new(code), dec!(100))
        };
        let batch = ConversionBatch {
            source: Currency::new("USD"),
            amount: dec!(100),
            results: vec![
                ConversionResult::success(request("GBP"), ConversionPayload::from("78 GBP")),
                ConversionResult::failure(request("EUR"), "HTTP 503"),
            ],
        };
        let html = PageRenderer::embedded().render_batch(&batch).unwrap();
        let gbp = html.find("<th>GBP</th>").unwrap();
        let eur = html.find("<th>EUR</th>").unwrap();
        assert!(gbp < eur);
        assert!(html.contains("78 GBP"));
        assert!(html.contains(r#"<p class="error">HTTP 503</p>"#));
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let renderer = renderer_with("{{heading}}|{{title}}");
        let out = renderer
            .render(
                RESULT_TEMPLATE,
                &[
                    ("heading", "{{title}}".to_string()),
                    ("title", "T".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(out, "{{title}}|T");
    }

    #[test]
    fn load_reads_templates_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let view = "V {{error}}{{amount}}{{currency1}}{{currency2}}{{all_checked}}{{main_currencies}}";
        std::fs::write(dir.path().join("view.html"), view).unwrap();
        std::fs::write(dir.path().join("result.html"), "R {{title}}").unwrap();

        let renderer = PageRenderer::load(Some(dir.path())).unwrap();
        let html = renderer.render_view(&FormValues::default(), None).unwrap();
        assert!(html.starts_with("V "));

        let empty = tempfile::tempdir().unwrap();
        assert!(matches!(
            PageRenderer::load(Some(empty.path())),
            Err(RenderError::Io { .. })
        ));
    }
}
