//! Receipt formatting
//!
//! Renders an order into a fixed-width kitchen ticket. Output is a plain
//! text document; transports (USB, network socket, file) consume the lines
//! as-is. When printing is disabled in the restaurant's configuration the
//! caller gets an explicit `Disabled` outcome instead of a document.

use serde::Serialize;
use shared::models::{
    ConsumptionMode, OrderView, PaymentMethod, Restaurant, RestaurantConfig,
};
use shared::money::format_cents;

use super::{local_time_label, tz_of};

/// Character columns on a 58mm thermal ticket.
pub const TICKET_WIDTH: usize = 32;

#[derive(Debug, Clone, Serialize)]
pub struct TicketDocument {
    pub lines: Vec<String>,
}

impl TicketDocument {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrintOutcome {
    /// Printing is turned off for this restaurant
    Disabled,
    Ticket { document: TicketDocument },
}

fn payment_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Cash => "Efectivo",
        PaymentMethod::Card => "Tarjeta",
        PaymentMethod::Transfer => "Transferencia",
        PaymentMethod::Debt => "Deuda",
    }
}

/// Render the kitchen ticket for an order.
pub fn render_ticket(
    restaurant: &Restaurant,
    config: &RestaurantConfig,
    view: &OrderView,
) -> PrintOutcome {
    if !config.printer_enabled {
        return PrintOutcome::Disabled;
    }

    let mut lines = Vec::new();
    lines.push(center(&restaurant.name));
    if !restaurant.address.is_empty() {
        lines.push(center(&restaurant.address));
    }
    if !restaurant.phone.is_empty() {
        lines.push(center(&restaurant.phone));
    }
    lines.push(rule('='));
    lines.push(center("COMANDA"));
    lines.push(center(&local_time_label(
        tz_of(restaurant),
        view.order.created_at,
    )));
    match view.order.consumption {
        ConsumptionMode::Local => {
            let table = view.order.table_label.as_deref().unwrap_or("-");
            lines.push(format!("MESA: {table}"));
        }
        ConsumptionMode::Takeaway => {
            lines.push("PARA LLEVAR".to_string());
            if let Some(name) = &view.order.customer_name {
                lines.push(format!("Cliente: {name}"));
            }
            if let Some(address) = &view.order.customer_address {
                lines.push(format!("Dir: {address}"));
            }
        }
    }
    lines.push(rule('-'));

    for item in &view.items {
        let label = format!("{}x {}", item.quantity, item.name);
        if config.show_prices {
            let price = format_cents(item.line_total_cents(), &restaurant.currency);
            lines.push(two_col(&label, &price));
        } else {
            lines.push(clip(&label));
        }
    }

    lines.push(rule('-'));
    if config.show_prices {
        lines.push(two_col(
            "TOTAL",
            &format_cents(view.total_cents, &restaurant.currency),
        ));
    }
    lines.push(format!("Pago: {}", payment_label(view.order.payment)));
    if let Some(ticket) = &view.order.ticket_number {
        lines.push(format!("Ticket: {ticket}"));
    }
    if let Some(cardholder) = &view.order.cardholder {
        lines.push(format!("Titular: {cardholder}"));
    }
    if let Some(reference) = &view.order.transfer_reference {
        lines.push(format!("Ref: {reference}"));
    }
    if let Some(debtor) = &view.order.debtor_name {
        lines.push(format!("Debe: {debtor}"));
    }
    lines.push(String::new());
    lines.push(center("Buen provecho!"));

    PrintOutcome::Ticket {
        document: TicketDocument { lines },
    }
}

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(TICKET_WIDTH).collect()
}

fn clip(text: &str) -> String {
    text.chars().take(TICKET_WIDTH).collect()
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= TICKET_WIDTH {
        return clip(text);
    }
    let pad = (TICKET_WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Left and right column on one line, right-aligned price.
fn two_col(left: &str, right: &str) -> String {
    let right_len = right.chars().count();
    let max_left = TICKET_WIDTH.saturating_sub(right_len + 1);
    let left: String = left.chars().take(max_left).collect();
    let gap = TICKET_WIDTH - left.chars().count() - right_len;
    format!("{}{}{}", left, " ".repeat(gap), right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{LineItemView, Order, OrderStatus, OrderView, PlanTier};

    fn restaurant() -> Restaurant {
        Restaurant {
            id: 1,
            name: "La Trattoria".to_string(),
            slug: "la-trattoria".to_string(),
            address: "Calle Mayor 1".to_string(),
            phone: "600123456".to_string(),
            currency: "€".to_string(),
            timezone: "UTC".to_string(),
            plan: PlanTier::Free,
            is_active: true,
            api_key: "k".to_string(),
            created_at: 0,
        }
    }

    fn order(consumption: ConsumptionMode) -> Order {
        Order {
            id: 7,
            restaurant_id: 1,
            user_id: 1,
            consumption,
            table_label: (consumption == ConsumptionMode::Local).then(|| "5".to_string()),
            customer_name: (consumption == ConsumptionMode::Takeaway).then(|| "Ana".to_string()),
            customer_address: None,
            payment: PaymentMethod::Cash,
            ticket_number: None,
            cardholder: None,
            transfer_reference: None,
            debtor_name: None,
            status: OrderStatus::Pending,
            created_at: 1_717_243_200_000, // 2024-06-01 12:00 UTC
            kitchen_at: None,
        }
    }

    fn view(consumption: ConsumptionMode) -> OrderView {
        OrderView::new(
            order(consumption),
            vec![
                LineItemView {
                    product_id: 1,
                    name: "Pizza Muzzarella".to_string(),
                    unit_price_cents: 2500,
                    quantity: 2,
                },
                LineItemView {
                    product_id: 2,
                    name: "Agua Mineral".to_string(),
                    unit_price_cents: 900,
                    quantity: 1,
                },
            ],
        )
    }

    fn enabled_config() -> RestaurantConfig {
        let mut config = RestaurantConfig::defaults(1);
        config.printer_enabled = true;
        config
    }

    #[test]
    fn disabled_printer_yields_no_document() {
        let outcome = render_ticket(
            &restaurant(),
            &RestaurantConfig::defaults(1),
            &view(ConsumptionMode::Local),
        );
        assert!(matches!(outcome, PrintOutcome::Disabled));
    }

    #[test]
    fn dine_in_ticket_layout() {
        let PrintOutcome::Ticket { document } = render_ticket(
            &restaurant(),
            &enabled_config(),
            &view(ConsumptionMode::Local),
        ) else {
            panic!("expected a ticket");
        };
        let text = document.text();
        assert!(text.contains("COMANDA"));
        assert!(text.contains("MESA: 5"));
        assert!(text.contains("01/06/2024 12:00"));
        assert!(text.contains("2x Pizza Muzzarella"));
        assert!(text.contains("€50.00"));
        assert!(text.contains("€59.00"));
        assert!(text.contains("Pago: Efectivo"));
        assert!(text.contains("Buen provecho!"));
        for line in &document.lines {
            assert!(line.chars().count() <= TICKET_WIDTH, "overflow: {line:?}");
        }
    }

    #[test]
    fn takeaway_ticket_names_the_customer() {
        let PrintOutcome::Ticket { document } = render_ticket(
            &restaurant(),
            &enabled_config(),
            &view(ConsumptionMode::Takeaway),
        ) else {
            panic!("expected a ticket");
        };
        let text = document.text();
        assert!(text.contains("PARA LLEVAR"));
        assert!(text.contains("Cliente: Ana"));
        assert!(!text.contains("MESA"));
    }

    #[test]
    fn hidden_prices_drop_the_amount_column() {
        let mut config = enabled_config();
        config.show_prices = false;
        let PrintOutcome::Ticket { document } =
            render_ticket(&restaurant(), &config, &view(ConsumptionMode::Local))
        else {
            panic!("expected a ticket");
        };
        let text = document.text();
        assert!(text.contains("2x Pizza Muzzarella"));
        assert!(!text.contains("€"));
        assert!(!text.contains("TOTAL"));
    }

    #[test]
    fn card_payment_prints_ticket_and_holder() {
        let mut v = view(ConsumptionMode::Local);
        v.order.payment = PaymentMethod::Card;
        v.order.ticket_number = Some("T-100".to_string());
        v.order.cardholder = Some("Ana".to_string());
        let PrintOutcome::Ticket { document } =
            render_ticket(&restaurant(), &enabled_config(), &v)
        else {
            panic!("expected a ticket");
        };
        let text = document.text();
        assert!(text.contains("Pago: Tarjeta"));
        assert!(text.contains("Ticket: T-100"));
        assert!(text.contains("Titular: Ana"));
    }

    #[test]
    fn prices_right_align_to_ticket_width() {
        let line = two_col("2x Pizza", "€50.00");
        assert_eq!(line.chars().count(), TICKET_WIDTH);
        assert!(line.ends_with("€50.00"));
    }
}
