//! Invoice form/table page
//!
//! One `tera` template renders both page variants. The variant only changes
//! the text catalog, text direction and which column the table shows
//! (edit/delete actions or a read-only status). The embedded script holds
//! the view logic: form submission, editing, confirmation before delete,
//! and the initial fetch of the collection.

pub mod format;
pub mod labels;

pub use format::format_amount;
pub use labels::Labels;

use crate::core::Invoice;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "invoices.html";
const TEMPLATE: &str = include_str!("templates/invoices.html");

/// Client script served at [`SCRIPT_PATH`]
pub const SCRIPT: &str = include_str!("assets/invoices.js");
pub const SCRIPT_PATH: &str = "/assets/invoices.js";

/// Which rendering of the page to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// English labels, editable table
    #[default]
    Standard,
    /// Arabic labels, right-to-left, display-only table with a status column
    Arabic,
}

impl PageVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageVariant::Standard => "standard",
            PageVariant::Arabic => "arabic",
        }
    }

    /// Whether rows carry edit/delete actions
    pub fn editable(&self) -> bool {
        matches!(self, PageVariant::Standard)
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "en" => Ok(PageVariant::Standard),
            "arabic" | "ar" => Ok(PageVariant::Arabic),
            other => Err(format!("unknown page variant '{}'", other)),
        }
    }
}

/// A table row as the template sees it
#[derive(Debug, Serialize)]
struct PageRow<'a> {
    id: u64,
    customer_name: &'a str,
    amount: f64,
    due_date: &'a str,
    created_at: String,
    overdue: bool,
}

/// Settings handed to the client script
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptConfig<'a> {
    variant: PageVariant,
    editable: bool,
    api_path: &'a str,
    today: String,
    labels: &'a Labels,
    /// Same snapshot as the rendered rows, so the first client render keeps them
    invoices: &'a [Invoice],
}

/// Renders the invoice page
pub struct PageRenderer {
    tera: Tera,
    api_path: String,
}

impl PageRenderer {
    /// Compile the page template
    pub fn new(api_path: impl Into<String>) -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        tera.register_filter("money", format::money_filter);

        Ok(Self {
            tera,
            api_path: api_path.into(),
        })
    }

    /// Render the page for `variant` with a snapshot of the current invoices
    ///
    /// The snapshot makes the page readable (and printable) before the
    /// script's first fetch completes.
    pub fn render(
        &self,
        variant: PageVariant,
        invoices: &[Invoice],
        today: NaiveDate,
    ) -> tera::Result<String> {
        let labels = Labels::for_variant(variant);

        let rows: Vec<PageRow<'_>> = invoices
            .iter()
            .map(|invoice| PageRow {
                id: invoice.id,
                customer_name: &invoice.customer_name,
                amount: invoice.amount,
                due_date: invoice.due_date.get(..10).unwrap_or(&invoice.due_date),
                created_at: invoice.created_at.format("%Y-%m-%d %H:%M").to_string(),
                overdue: invoice.is_overdue(today),
            })
            .collect();

        let script_config = ScriptConfig {
            variant,
            editable: variant.editable(),
            api_path: &self.api_path,
            today: today.format("%Y-%m-%d").to_string(),
            labels,
            invoices,
        };
        let script_config = serde_json::to_string(&script_config)
            .map_err(|e| tera::Error::msg(e.to_string()))?
            // Keep the JSON from terminating the surrounding <script> element
            .replace("</", "<\\/");

        let mut context = Context::new();
        context.insert("labels", labels);
        context.insert("variant", variant.as_str());
        context.insert("editable", &variant.editable());
        context.insert("rows", &rows);
        context.insert("script_config", &script_config);
        context.insert("script_path", SCRIPT_PATH);

        self.tera.render(TEMPLATE_NAME, &context)
    }
}
