use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "grubdash", about = "In-memory dishes and orders API")]
pub struct Arguments {
    /// Address the HTTP server listens on.
    #[clap(long, env, default_value = "0.0.0.0:5000")]
    pub bind_address: SocketAddr,

    /// JSON file with `dishes` and `orders` to load at startup.
    #[clap(long, env)]
    pub seed_file: Option<PathBuf>,

    /// Tracing filter directives, e.g. `info` or `info,grubdash::api=debug`.
    #[clap(long, env, default_value = "info")]
    pub log_filter: String,

    /// Capacity of each actor's request channel.
    #[clap(long, env, default_value = "32")]
    pub actor_buffer: usize,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "bind_address: {}", self.bind_address)?;
        writeln!(f, "seed_file: {:?}", self.seed_file)?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        writeln!(f, "actor_buffer: {}", self.actor_buffer)?;
        Ok(())
    }
}
