//! Line items table for claim details
//!
//! `LineItemsDataTable` is column-driven: each column is a key plus a label,
//! and cell text is produced by `format_value` from the column key alone.

use crate::shared::components::table::format_usd;
use crate::shared::date_utils::format_iso_date;
use contracts::domain::a001_claim::aggregate::LineItem;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub name: &'static str,
}

pub const LINE_ITEM_COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "procedureCode", name: "Procedure Code" },
    ColumnDef { key: "description", name: "Description" },
    ColumnDef { key: "serviceDate", name: "Service Date" },
    ColumnDef { key: "amount", name: "Amount" },
    ColumnDef { key: "discount", name: "Discount" },
];

pub const APPLY_DISCOUNT_LABEL: &str = "Apply Discount";

/// Raw value of a single field, before formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

/// A row the data table can render
pub trait TableRowData {
    fn row_key(&self) -> String;
    fn field(&self, key: &str) -> Option<FieldValue>;
}

impl TableRowData for LineItem {
    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "procedureCode" => Some(FieldValue::Text(self.procedure_code.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "serviceDate" => Some(FieldValue::Text(self.service_date.clone())),
            "amount" => Some(FieldValue::Number(self.amount)),
            "discount" => Some(FieldValue::Number(self.discount)),
            "claimId" => self.claim_id.clone().map(FieldValue::Text),
            _ => None,
        }
    }
}

/// Cell text for a column key
///
/// - `serviceDate` → `YYYY-MM-DD`
/// - `amount`, `discount` → USD
/// - anything else → the raw value, or "-" when empty or zero
pub fn format_value(key: &str, value: Option<&FieldValue>) -> String {
    match (key, value) {
        ("serviceDate", Some(FieldValue::Text(s))) => format_iso_date(s),
        ("amount" | "discount", Some(FieldValue::Number(n))) => format_usd(*n),
        (_, Some(FieldValue::Text(s))) if !s.is_empty() => s.clone(),
        (_, Some(FieldValue::Number(n))) if *n != 0.0 && !n.is_nan() => n.to_string(),
        _ => "-".to_string(),
    }
}

pub fn row_cells<T: TableRowData>(columns: &[ColumnDef], row: &T) -> Vec<String> {
    columns
        .iter()
        .map(|c| format_value(c.key, row.field(c.key).as_ref()))
        .collect()
}

/// Header labels, with an empty trailing cell for the row action column
pub fn header_labels(columns: &[ColumnDef]) -> Vec<&'static str> {
    columns.iter().map(|c| c.name).chain(std::iter::once("")).collect()
}

fn is_money_column(key: &str) -> bool {
    matches!(key, "amount" | "discount")
}

/// Fixed line item columns with an "Apply Discount" link per row
///
/// What applying a discount means is up to the caller; the table only reports
/// which line item was clicked.
#[component]
pub fn LineItemsTable(
    #[prop(into)] items: Signal<Vec<LineItem>>,
    on_apply_discount: Callback<LineItem>,
) -> impl IntoView {
    view! {
        <LineItemsDataTable
            columns=LINE_ITEM_COLUMNS
            rows=items
            action_label=APPLY_DISCOUNT_LABEL
            on_row_action=on_apply_discount
        />
    }
}

#[component]
pub fn LineItemsDataTable<T>(
    columns: &'static [ColumnDef],
    rows: Signal<Vec<T>>,
    action_label: &'static str,
    on_row_action: Callback<T>,
) -> impl IntoView
where
    T: TableRowData + Clone + Send + Sync + 'static,
{
    view! {
        <div style="overflow-x: auto;">
            <Table>
                <TableHeader>
                    <TableRow>
                        {header_labels(columns)
                            .into_iter()
                            .map(|label| view! { <TableHeaderCell>{label}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| row.row_key()
                        children=move |row: T| {
                            let cells = row_cells(columns, &row);
                            view! {
                                <TableRow>
                                    {columns
                                        .iter()
                                        .zip(cells)
                                        .map(|(column, text)| {
                                            let class = if is_money_column(column.key) { "text-right" } else { "" };
                                            view! {
                                                <TableCell class=class>
                                                    <TableCellLayout>{text}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()}
                                    <TableCell>
                                        <TableCellLayout>
                                            <a
                                                href="#"
                                                on:click=move |e: web_sys::MouseEvent| {
                                                    e.prevent_default();
                                                    on_row_action.run(row.clone());
                                                }
                                            >
                                                {action_label}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, amount: f64, discount: f64) -> LineItem {
        LineItem {
            id,
            procedure_code: "P1".into(),
            description: "X".into(),
            service_date: "2023-01-01".into(),
            amount,
            discount,
            claim_id: Some("C1".into()),
        }
    }

    #[test]
    fn test_header_has_action_column() {
        let headers = header_labels(LINE_ITEM_COLUMNS);
        assert_eq!(headers.len(), 6);
        assert_eq!(
            headers,
            vec!["Procedure Code", "Description", "Service Date", "Amount", "Discount", ""]
        );
    }

    #[test]
    fn test_row_cells() {
        assert_eq!(
            row_cells(LINE_ITEM_COLUMNS, &item(1, 50.0, 0.0)),
            vec!["P1", "X", "2023-01-01", "$50.00", "$0.00"]
        );
        assert_eq!(
            row_cells(LINE_ITEM_COLUMNS, &item(2, 1234.5, 10.25))[3..],
            ["$1,234.50".to_string(), "$10.25".to_string()]
        );
    }

    #[test]
    fn test_service_date_timestamp_is_trimmed() {
        let mut row = item(1, 0.0, 0.0);
        row.service_date = "2023-03-05T00:00:00Z".into();
        assert_eq!(row_cells(LINE_ITEM_COLUMNS, &row)[2], "2023-03-05");
    }

    #[test]
    fn test_empty_text_renders_placeholder() {
        let mut row = item(1, 0.0, 0.0);
        row.description = String::new();
        assert_eq!(row_cells(LINE_ITEM_COLUMNS, &row)[1], "-");
    }

    #[test]
    fn test_format_value_generic_rule() {
        assert_eq!(format_value("procedureCode", None), "-");
        assert_eq!(format_value("id", Some(&FieldValue::Number(0.0))), "-");
        assert_eq!(format_value("id", Some(&FieldValue::Number(7.0))), "7");
        assert_eq!(format_value("unknown", Some(&FieldValue::Text("v".into()))), "v");
    }

    #[test]
    fn test_row_key_and_back_reference() {
        let row = item(42, 1.0, 0.0);
        assert_eq!(row.row_key(), "42");
        assert_eq!(row.field("claimId"), Some(FieldValue::Text("C1".into())));
        assert_eq!(row.field("nope"), None);
    }
}
