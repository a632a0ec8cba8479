use std::sync::Arc;

use bench_server::config::{Config, ServerContext};
use bench_server::logger;
use bench_server::routes::RouteTable;
use bench_server::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args(std::env::args().skip(1));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(config))
}

async fn async_main(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;

    // Bind failure is fatal: propagate and exit non-zero, no retry.
    let listener = server::create_reusable_listener(addr)?;
    let local_addr = listener.local_addr()?;

    let ctx = Arc::new(ServerContext::new(config, RouteTable::benchmark()));

    logger::log_server_start(&local_addr, &ctx.routes);

    server::serve(listener, ctx).await;
    Ok(())
}
