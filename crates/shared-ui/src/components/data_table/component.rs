use dioxus::prelude::*;

/// Records table: a fixed set of column headers with rows as children.
///
/// The console's tables are read-only listings, so there is no row
/// click handling; row actions live in their own cells.
#[component]
pub fn DataTable(columns: Vec<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pc-data-table",
            table {
                thead {
                    tr {
                        for column in columns {
                            th { "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "pc-data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_come_from_the_columns_prop() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                DataTable {
                    columns: vec!["Make".to_string(), "Model".to_string()],
                    DataTableRow {
                        DataTableCell { "SecureChip" }
                        DataTableCell { "SC-500" }
                    }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<th>Make</th>"), "html: {html}");
        assert!(html.contains("<th>Model</th>"), "html: {html}");
        assert!(html.contains("<td>SecureChip</td>"), "html: {html}");
        assert!(html.contains("<td>SC-500</td>"), "html: {html}");
    }
}
