use dioxus::prelude::*;

use store::{has_next, has_prev, pager_items, total_pages, PageWindow, PagerItem, User};

/// Pager control under the user list.
///
/// Consumes the [`PageWindow`] the view already computed: the
/// "Showing X-Y of N results" line comes from [`PageWindow::summary`], so
/// the indices always match the rendered rows (including the `0-0` form for
/// an empty window). The button row comes from [`store::pager_items`]:
/// page 1 and the last page always, the current page's neighbors, ellipses
/// for the gaps. The arrows disable at the edges.
#[component]
pub fn Pagination(window: PageWindow<User>, on_page_change: EventHandler<u32>) -> Element {
    let current_page = window.page;
    let total = total_pages(window.total, window.page_size);

    let buttons = pager_items(current_page, total)
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            PagerItem::Page(page) => rsx! {
                button {
                    key: "page-{page}",
                    class: if page == current_page { "active" } else { "" },
                    onclick: move |_| on_page_change.call(page),
                    "{page}"
                }
            },
            PagerItem::Ellipsis => rsx! {
                button {
                    key: "ellipsis-{i}",
                    disabled: true,
                    "..."
                }
            },
        });

    rsx! {
        div {
            class: "pagination",
            span {
                class: "pagination-summary",
                "{window.summary()}"
            }
            div {
                class: "pagination-controls",
                button {
                    "aria-label": "Previous page",
                    disabled: !has_prev(current_page),
                    onclick: move |_| on_page_change.call(current_page.saturating_sub(1)),
                    "\u{2039}"
                }
                {buttons}
                button {
                    "aria-label": "Next page",
                    disabled: !has_next(current_page, total),
                    onclick: move |_| on_page_change.call(current_page + 1),
                    "\u{203A}"
                }
            }
        }
    }
}
