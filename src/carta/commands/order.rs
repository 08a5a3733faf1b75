use super::{CmdMessage, CmdResult};
use crate::composer::{compose, OrderForm, OPENING_HINT};
use crate::config::CartaConfig;
use crate::error::Result;

pub fn run(config: &CartaConfig, form: &OrderForm) -> Result<CmdResult> {
    let link = compose(form, &config.contact.phone, &config.contact.business_name);
    let mut result = CmdResult::default().with_order(link);
    result.add_message(CmdMessage::success(OPENING_HINT));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_link_to_configured_phone() {
        let mut config = CartaConfig::default();
        config.contact.phone = "5711".to_string();
        let form = OrderForm {
            name: "Ana".to_string(),
            ..OrderForm::default()
        };
        let result = run(&config, &form).unwrap();
        let order = result.order.unwrap();
        assert!(order.url.starts_with("https://wa.me/5711?text=Hola%2C%20soy%20Ana."));
        assert!(order.text.contains("Repostería y Gourmet KDJ"));
        assert_eq!(result.messages[0].content, OPENING_HINT);
    }
}
