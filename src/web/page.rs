//! Server-side markup for the checkout and confirmation pages.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::domain::{CustomerInfo, PaymentMethod, PlacedOrder};
use crate::filter::{Visibility, VisibilityMap};
use crate::summary::{format_money, summarize, ItemRow, OrderSummary, SummaryRow};

use super::CHECKOUT_PATH;

/// Browser-side twin of [`crate::filter::apply_filter`]: lowercases the query
/// and toggles `hidden` on every `data-tile` element whose id lacks it.
const FILTER_SCRIPT: &str = r#"
(function () {
  var search = document.getElementById('search-box');
  if (!search) { return; }
  search.addEventListener('input', function () {
    var query = search.value.toLowerCase();
    document.querySelectorAll('[data-tile]').forEach(function (tile) {
      var key = tile.getAttribute('data-tile').toLowerCase();
      tile.classList.toggle('hidden', query !== '' && key.indexOf(query) === -1);
    });
  });
})();
"#;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 48rem; margin: 0 auto; padding: 1rem; }
.tile { display: flex; gap: 1rem; align-items: center; padding: .5rem; border-bottom: 1px solid #ddd; }
.tile img { width: 4rem; height: 4rem; }
.tile.next-day { background: #fff4d6; }
.tile.total { justify-content: space-between; font-weight: bold; }
.banner { background: #ffe08a; padding: .75rem; margin: 1rem 0; }
.hidden { display: none; }
label { display: block; margin: .5rem 0; }
"#;

pub struct CheckoutView<'a> {
    pub summary: &'a OrderSummary,
    pub visibility: &'a VisibilityMap,
    pub query: &'a str,
    pub customer: &'a CustomerInfo,
    pub payment_method: PaymentMethod,
    pub shop_url: &'a str,
}

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body { (body) }
        }
    }
}

/// `"tile next-day hidden"` and the like.
fn tile_class(item: &ItemRow, visibility: Visibility) -> String {
    let mut class = format!("tile {}", item.tag.css_class());
    if !visibility.is_visible() {
        class.push_str(" hidden");
    }
    class
}

/// DOM id of a tile, prefixed so it cannot clash with the page's own ids.
fn tile_dom_id(item: &ItemRow) -> String {
    format!("tile-{}", item.tile)
}

fn item_tile(item: &ItemRow, visibility: Visibility) -> Markup {
    html! {
        div class=(tile_class(item, visibility)) id=(tile_dom_id(item)) data-tile=(item.tile.as_str()) {
            @if let Some(url) = &item.photo_url {
                img src=(url) alt=(item.name);
            }
            div .details {
                strong .name { (item.name) }
                div .price { (item.price) }
                div .quantity { (item.quantity) }
            }
            div .line-total { (item.line_total) }
        }
    }
}

fn text_input(label: &str, name: &str, value: &str, required: bool) -> Markup {
    html! {
        label {
            (label)
            input type="text" name=(name) value=(value) required[required];
        }
    }
}

pub fn checkout_page(view: &CheckoutView) -> Markup {
    let customer = view.customer;
    layout("Zamówienie", html! {
        h1 { "Twoje zamówienie" }

        @if let Some(banner) = view.summary.banner {
            div .banner role="alert" { (banner.message()) }
        }

        form method="get" action=(CHECKOUT_PATH) {
            input #search-box type="search" name="q" value=(view.query)
                placeholder="Szukaj w koszyku" autocomplete="off";
        }

        div .tiles {
            @for row in &view.summary.rows {
                @match row {
                    SummaryRow::Item(item) => {
                        (item_tile(item, view.visibility.get(&item.tile).copied().unwrap_or(Visibility::Visible)))
                    }
                    SummaryRow::Total { amount } => {
                        div .tile.total {
                            span { "Do zapłaty:" }
                            span .amount { (amount) }
                        }
                    }
                }
            }
        }

        form method="post" action=(CHECKOUT_PATH) {
            h2 { "Dane do dostawy" }
            (text_input("Telefon", "phone", &customer.phone, true))
            (text_input("Ulica", "street", &customer.street, true))
            (text_input("Numer domu", "house_number", &customer.house_number, true))
            (text_input("Numer mieszkania", "flat_number", &customer.flat_number, false))
            (text_input("Miejscowość", "city", &customer.city, true))
            label {
                "E-mail"
                input type="email" name="email" value=(customer.email);
            }
            label {
                "Uwagi"
                textarea name="comments" { (customer.comments) }
            }
            label {
                input type="checkbox" name="remember-data" value="True" checked[customer.remember];
                " Zapamiętaj moje dane"
            }

            h2 { "Forma płatności" }
            @for method in PaymentMethod::ALL {
                label {
                    input type="radio" name="payment_method" value=(method.form_value())
                        checked[method == view.payment_method];
                    " " (method.label())
                }
            }

            a href=(view.shop_url) { "Wróć" }
            " "
            button type="submit" { "Zamawiam" }
        }

        script { (PreEscaped(FILTER_SCRIPT)) }
    })
}

pub fn confirmation_page(placed: &PlacedOrder) -> Markup {
    let summary = summarize(&placed.order);
    layout("Zamówienie przyjęte", html! {
        h1 { "Zamówienie " (placed.number) " przyjęte" }

        div .tiles {
            @for row in &summary.rows {
                @match row {
                    SummaryRow::Item(item) => { (item_tile(item, Visibility::Visible)) }
                    SummaryRow::Total { amount } => {
                        div .tile.total {
                            span { "Razem:" }
                            span .amount { (amount) }
                        }
                    }
                }
            }
        }

        dl {
            dt { "Forma płatności" }
            dd { (placed.payment_method.label()) }
            dt { "Termin dostawy" }
            dd { (placed.delivery_date_label()) }
            dt { "Adres dostawy" }
            dd { (placed.customer.street_line()) ", " (placed.customer.city) }
            dt { "Do zapłaty" }
            dd { (format_money(placed.order.grand_total())) }
        }

        pre .confirmation { (placed.confirmation_message()) }
    })
}
