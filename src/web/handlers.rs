use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Local;
use maud::Markup;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::cookies::{
    forget_customer, forget_session, remember_customer, remembered_customer, session_cookie, session_id,
};
use super::form::CheckoutForm;
use super::page::{self, CheckoutView};
use super::state::AppState;
use super::{confirmation_path, CHECKOUT_PATH};
use crate::domain::{Order, PaymentMethod, PendingCheckout};
use crate::error::CheckoutError;
use crate::filter::apply_filter;
use crate::summary::summarize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// The checkout behind the session cookie, if it is still open.
async fn current_checkout(state: &AppState, jar: &CookieJar) -> Result<Option<PendingCheckout>, CheckoutError> {
    match session_id(jar) {
        Some(id) => state.checkout_client.get_checkout(id).await,
        None => Ok(None),
    }
}

fn back_to_shop(state: &AppState) -> Response {
    debug!(shop_url = %state.config.shop_url, "No open checkout, redirecting to the shop");
    Redirect::to(&state.config.shop_url).into_response()
}

/// Receives a computed order from the shop and opens a checkout for it,
/// replacing the one the session had open.
#[instrument(skip_all)]
pub async fn open_checkout(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(order): Json<Order>,
) -> Result<(CookieJar, Redirect), CheckoutError> {
    if let Some(previous) = session_id(&jar) {
        state.checkout_client.close_checkout(previous).await?;
    }
    let id = state.checkout_client.open_checkout(order).await?;
    Ok((jar.add(session_cookie(id)), Redirect::to(CHECKOUT_PATH)))
}

#[instrument(skip_all)]
pub async fn checkout_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(search): Query<SearchQuery>,
) -> Result<Response, CheckoutError> {
    let Some(checkout) = current_checkout(&state, &jar).await? else {
        return Ok(back_to_shop(&state));
    };

    let summary = summarize(&checkout.order);
    let visibility = apply_filter(&search.q, summary.tiles());
    let customer = remembered_customer(&jar);

    let markup = page::checkout_page(&CheckoutView {
        summary: &summary,
        visibility: &visibility,
        query: &search.q,
        customer: &customer,
        payment_method: PaymentMethod::default(),
        shop_url: &state.config.shop_url,
    });
    Ok(markup.into_response())
}

/// Places the order, settles both cookies and sends the customer to the
/// confirmation page.
///
/// The checkout is taken out of the store before the order is placed, so a
/// repeated submit of the same session finds nothing and goes back to the shop.
#[instrument(skip_all)]
pub async fn submit_checkout(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CheckoutForm>,
) -> Result<Response, CheckoutError> {
    let (customer, payment_method) = form.into_parts();
    let remembered = customer.remember.then(|| remember_customer(&customer)).transpose()?;

    let checkout = match session_id(&jar) {
        Some(id) => state.checkout_client.take_checkout(id).await?,
        None => None,
    };
    let Some(checkout) = checkout else {
        return Ok(back_to_shop(&state));
    };

    let number = state
        .order_client
        .place_order(checkout.order, customer, payment_method, Local::now().naive_local())
        .await?;
    info!(order_number = %number, session = %checkout.id, "Checkout completed");

    let jar = jar.remove(forget_session());
    let jar = match remembered {
        Some(cookie) => jar.add(cookie),
        None => jar.remove(forget_customer()),
    };
    Ok((jar, Redirect::to(&confirmation_path(&number))).into_response())
}

#[instrument(skip_all)]
pub async fn order_confirmation(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Markup, CheckoutError> {
    let placed = state
        .order_client
        .get_order(number.clone())
        .await?
        .ok_or(CheckoutError::OrderNotFound(number))?;
    Ok(page::confirmation_page(&placed))
}
