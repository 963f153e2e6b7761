use derive_more::Display;
use thiserror::Error;

use crate::config::Config;
use crate::render::{Alignment, CellStyle, Page};
use crate::sheet::GridPlan;

/// The template identifiers a sheet can be generated from.
pub const AVAILABLE_TEMPLATES: [usize; 1] = [1];

/// A validated template identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct TemplateId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "template {0} is not a valid template (available templates are: {available:?})",
    available = AVAILABLE_TEMPLATES
)]
pub struct UnsupportedTemplate(pub usize);

impl TemplateId {
    pub fn new(id: usize) -> Result<Self, UnsupportedTemplate> {
        if AVAILABLE_TEMPLATES.contains(&id) {
            Ok(Self(id))
        } else {
            Err(UnsupportedTemplate(id))
        }
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self(1)
    }
}

/// Character widths of the four table columns.
const COLUMN_WIDTHS: [usize; 4] = [22, 12, 22, 12];
const COLUMN_TITLES: [&str; 4] = ["Jour", "Présent", "Jour", "Présent"];

/// Width of a table line including its five border columns.
const PAGE_WIDTH: usize = COLUMN_WIDTHS[0]
    + COLUMN_WIDTHS[1]
    + COLUMN_WIDTHS[2]
    + COLUMN_WIDTHS[3]
    + 5;
const HALF_WIDTH: usize = PAGE_WIDTH / 2;

const SUBJECT_LABEL: &str = "Objet :";

/// Draws the sheet described by `config` onto the page.
///
/// Everything has been validated upstream, rendering itself cannot fail.
pub fn render(config: &Config, plan: &GridPlan, page: &mut dyn Page) {
    match config.template().as_usize() {
        1 => template_1(config, plan, page),
        // TemplateId rejects everything else on construction
        _ => unreachable!(),
    }
}

/// Writes a multi-line text block, one fixed width cell per line.
fn block(page: &mut dyn Page, indent: usize, width: usize, text: &str, style: CellStyle) {
    for line in text.lines() {
        if indent > 0 {
            page.cell(indent, "", CellStyle::new());
        }

        page.cell(width, line, style);
        page.line_break();
    }
}

fn template_1(config: &Config, plan: &GridPlan, page: &mut dyn Page) {
    let text = config.text();

    // sender block top left, receiver block below it on the right
    block(page, 0, HALF_WIDTH, &text.sender, CellStyle::new());
    page.line_break();
    block(
        page,
        PAGE_WIDTH - HALF_WIDTH,
        HALF_WIDTH,
        &text.receiver,
        CellStyle::new().align(Alignment::Right),
    );
    page.line_break();

    // subject line
    page.cell(
        SUBJECT_LABEL.chars().count() + 1,
        SUBJECT_LABEL,
        CellStyle::new().bold(),
    );
    page.cell(
        HALF_WIDTH,
        &format!("{} {}", text.subject_prefix, config.month()),
        CellStyle::new(),
    );
    page.line_break();
    page.line_break();

    // table header
    for (width, title) in COLUMN_WIDTHS.into_iter().zip(COLUMN_TITLES) {
        page.cell(
            width,
            title,
            CellStyle::new().bordered().bold().align(Alignment::Center),
        );
    }
    page.line_break();

    for row in plan.rows() {
        for (index, (width, cell)) in COLUMN_WIDTHS.into_iter().zip(row.cells()).enumerate() {
            let align = if index % 2 == 0 {
                // day column
                Alignment::Left
            } else {
                // presence column
                Alignment::Center
            };

            page.cell(
                width,
                cell.text(),
                CellStyle::new()
                    .bordered()
                    .filled(cell.is_filled())
                    .align(align),
            );
        }

        page.line_break();
    }

    // total row, both halves span a column pair
    // (+ 1 swallows the border column the pair shared)
    page.cell(
        COLUMN_WIDTHS[0] + COLUMN_WIDTHS[1] + 1,
        &text.total_label,
        CellStyle::new().bordered().bold(),
    );
    page.cell(
        COLUMN_WIDTHS[2] + COLUMN_WIDTHS[3] + 1,
        &plan.worked_total().to_string(),
        CellStyle::new().bordered().bold().align(Alignment::Center),
    );
    page.line_break();
    page.line_break();

    // signature footer
    page.cell(HALF_WIDTH, &text.sender_signature_title, CellStyle::new());
    page.cell(
        PAGE_WIDTH - HALF_WIDTH,
        &text.receiver_signature_title,
        CellStyle::new().align(Alignment::Right),
    );
    page.line_break();
}
