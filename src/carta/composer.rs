//! Order message composer.
//!
//! Turns the order form into a prefilled WhatsApp link. Pure string building:
//! nothing is stored and nothing can fail. The catalog never feeds the form;
//! the detail view only links to the form's section.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters `encodeURIComponent` leaves as they are, besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Shown while the link is being opened.
pub const OPENING_HINT: &str = "Abriendo WhatsApp con tu pedido…";

/// Raw values of the order form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "telefono")]
    pub phone: String,
    #[serde(default, alias = "correo")]
    pub email: String,
    #[serde(default, alias = "tipo")]
    pub kind: String,
    #[serde(default, alias = "fecha")]
    pub date: String,
    #[serde(default, alias = "mensaje")]
    pub message: String,
}

/// A composed order ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLink {
    pub text: String,
    pub url: String,
}

/// Builds the message text. Blank lines are dropped.
pub fn compose_message(form: &OrderForm, business_name: &str) -> String {
    let name = form.name.trim();
    let phone = form.phone.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    let lines = [
        format!("Hola, soy {}.", or_default(name, "un cliente")),
        String::new(),
        format!(
            "Quiero hacer un pedido de tipo: {}.",
            or_default(&form.kind, "sin especificar")
        ),
        labelled("Fecha", &form.date),
        labelled("Teléfono", phone),
        labelled("Correo", email),
        String::new(),
        "Mensaje:".to_string(),
        or_default(message, "(sin mensaje adicional)").to_string(),
        String::new(),
        format!("Enviado desde la web de {}.", business_name),
    ];

    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `https://wa.me/<phone>?text=<encoded text>`
pub fn order_url(phone: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone,
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

pub fn compose(form: &OrderForm, phone: &str, business_name: &str) -> OrderLink {
    let text = compose_message(form, business_name);
    let url = order_url(phone, &text);
    OrderLink { text, url }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn labelled(label: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{}: {}", label, value)
    }
}
