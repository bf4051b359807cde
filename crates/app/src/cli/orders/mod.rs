use clap::{Args, Subcommand};
use ovenline_app::domain::{orders::models::Order, pricing::format_amount};

mod set_status;
mod show;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Print one order with its items
    Show(show::ShowOrderArgs),

    /// Move an order between Paid and Completed
    SetStatus(set_status::SetStatusArgs),
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::Show(args) => show::run(args).await,
        OrdersSubcommand::SetStatus(args) => set_status::run(args).await,
    }
}

pub(crate) fn print_order(order: &Order) {
    println!("order_id: {}", order.id);
    println!("customer_name: {}", order.customer_name);
    println!("status: {}", order.status);
    println!("created_at: {}", order.created_at);
    println!("total: {}", format_amount(order.total_amount));

    for item in &order.items {
        if item.options.is_empty() {
            println!("  - {} {}", item.product_name, format_amount(item.price));
        } else {
            println!(
                "  - {} ({}) {}",
                item.product_name,
                item.options,
                format_amount(item.price)
            );
        }
    }
}
