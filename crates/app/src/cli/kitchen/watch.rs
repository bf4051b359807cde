use std::time::Duration;

use clap::Args;
use jiff::{SignedDuration, Timestamp};
use ovenline_app::domain::{
    kitchen::{
        KitchenFeed, KitchenService, PgKitchenService,
        policy::KitchenPolicy,
        reconciler::{PollReconciler, WaitTime},
    },
    orders::models::{Order, OrderId},
};
use tokio::{signal, time};
use tracing::warn;

fn window_hours(value: &str) -> Result<SignedDuration, String> {
    let hours = value
        .trim()
        .parse::<i64>()
        .map_err(|error| format!("invalid hour count: {error}"))?;

    KitchenPolicy::window_hours(hours).map_err(|error| error.to_string())
}

#[derive(Debug, Args)]
pub(crate) struct WatchArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Seconds between feed fetches
    #[arg(long, env = "KITCHEN_POLL_INTERVAL_SECS", default_value_t = 5)]
    poll_interval_secs: u64,

    /// Hours of orders shown on the feed
    #[arg(
        long = "window-hours",
        env = "KITCHEN_WINDOW_HOURS",
        default_value = "24",
        value_parser = window_hours
    )]
    window: SignedDuration,

    /// Completed tickets kept on the feed
    #[arg(long, env = "KITCHEN_COMPLETED_LIMIT", default_value_t = 4)]
    completed_limit: u32,

    /// Ring the terminal bell when a new ticket arrives
    #[arg(long)]
    bell: bool,
}

pub(crate) async fn run(args: WatchArgs) -> Result<(), String> {
    let db = super::super::connect(&args.database_url).await?;

    let kitchen = PgKitchenService::new(
        db,
        KitchenPolicy {
            window: args.window,
            completed_limit: args.completed_limit,
        },
    );

    let mut reconciler = PollReconciler::new();

    if args.bell {
        reconciler.arm_audio();
    }

    let mut poll = time::interval(Duration::from_secs(args.poll_interval_secs.max(1)));
    let mut refresh = time::interval(Duration::from_secs(1));
    let mut last: Option<(KitchenFeed, Vec<OrderId>)> = None;

    loop {
        tokio::select! {
            _ = poll.tick() => {}
            _ = refresh.tick() => {
                if let Some((feed, new_ids)) = &last {
                    render(feed, Timestamp::now(), new_ids);
                }
                continue;
            }
            _ = signal::ctrl_c() => return Ok(()),
        }

        let now = Timestamp::now();

        // A failed fetch leaves the last rendering in place and retries on the next tick.
        let feed = match kitchen.feed(now).await {
            Ok(feed) => feed,
            Err(error) => {
                warn!(error = %error, "kitchen feed fetch failed");
                continue;
            }
        };

        let outcome = reconciler.observe(feed.active.iter().map(|order| order.id));

        if outcome.alert {
            print!("\x07");
        }

        render(&feed, now, &outcome.new_ids);

        last = Some((feed, outcome.new_ids));
    }
}

fn render(feed: &KitchenFeed, now: Timestamp, new_ids: &[OrderId]) {
    print!("\x1b[2J\x1b[H");
    println!("==== kitchen @ {} ====", now.strftime("%H:%M:%S"));

    if feed.active.is_empty() {
        println!("All Caught Up!");
    }

    for order in &feed.active {
        let marker = if new_ids.contains(&order.id) { "*" } else { " " };
        print_ticket(order, now, marker);
    }

    if !feed.completed.is_empty() {
        println!("---- recently completed ----");

        for order in &feed.completed {
            print_ticket(order, now, " ");
        }
    }
}

fn print_ticket(order: &Order, now: Timestamp, marker: &str) {
    let wait = WaitTime::between(order.created_at, now);
    let overdue = if wait.overdue { " OVERDUE" } else { "" };

    println!("{marker}#{} [{}] {wait}{overdue}", order.id, order.status);

    for item in &order.items {
        if item.options.is_empty() {
            println!("    {}", item.product_name);
        } else {
            println!("    {} ({})", item.product_name, item.options);
        }
    }
}
