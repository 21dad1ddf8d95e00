// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::schema::{schema, Kind};

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct ShippingAddress {
    pub country_code: String => required Kind::String,
    pub state: String => required Kind::String,
    pub city: String => required Kind::String,
    pub street_line1: String => required Kind::String,
    pub street_line2: String => required Kind::String,
    pub post_code: String => required Kind::String,
  }
}

schema! {
  #[derive(Debug, Clone, Default, PartialEq)]
  pub struct OrderInfo {
    pub name: Option<String> => optional Kind::String,
    pub phone_number: Option<String> => optional Kind::String,
    pub email: Option<String> => optional Kind::String,
    pub shipping_address: Option<ShippingAddress> => optional Kind::Entity(ShippingAddress::shape),
  }
}

schema! {
  #[derive(Debug, Clone, PartialEq)]
  pub struct SuccessfulPayment {
    /// Three-letter ISO 4217 code.
    pub currency: String => required Kind::String,
    /// In the smallest units of the currency.
    pub total_amount: i32 => required Kind::Int32,
    pub invoice_payload: String => required Kind::String,
    pub shipping_option_id: Option<String> => optional Kind::String,
    pub order_info: Option<OrderInfo> => optional Kind::Entity(OrderInfo::shape),
    pub telegram_payment_charge_id: String => required Kind::String,
    pub provider_payment_charge_id: String => required Kind::String,
  }
}
