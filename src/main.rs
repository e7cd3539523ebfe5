#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::sync::Arc;

#[cfg(feature = "std")]
use boardgame::{
    init_logging, print_board, serve_tcp, BoardApi, BoardService, BoardStore, GridId,
    InMemoryStore, InMemoryTransport, Orientation, ServiceConfig, ShipPlacement, Skeleton, Stub,
    TcpTransport, DEFAULT_BIND, DEFAULT_GRID_SIZE, MAX_GRID_SIZE,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Direction {
    Horizontal,
    Vertical,
}

#[cfg(feature = "std")]
impl From<Direction> for Orientation {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Horizontal => Orientation::Horizontal,
            Direction::Vertical => Orientation::Vertical,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Serve boards over TCP from an in-memory store.
    Serve {
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: String,
        #[arg(long, default_value_t = MAX_GRID_SIZE, help = "Largest board side length accepted")]
        max_size: i32,
        #[arg(long, help = "Fix RNG seed for reproducible board ids (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Send a single request to a running server.
    Client {
        #[arg(long, default_value = DEFAULT_BIND)]
        connect: String,
        #[command(subcommand)]
        action: ClientAction,
    },
    /// Create a board, place a ship and fire a few shots, all in-process.
    Demo {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: i32,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum ClientAction {
    /// Create a board and print its id.
    Create { size: i32 },
    /// Print a board.
    Show {
        id: String,
        #[arg(long)]
        reveal: bool,
    },
    /// Place a ship.
    AddShip {
        id: String,
        length: i32,
        row: i32,
        col: i32,
        #[arg(long, value_enum, default_value_t = Direction::Horizontal)]
        direction: Direction,
    },
    /// Fire at a cell.
    Attack { id: String, row: i32, col: i32 },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            max_size,
            seed,
        } => {
            let store = InMemoryStore::new();
            store.connect().await?;
            let config = ServiceConfig {
                max_size,
                seed,
            };
            let service = Arc::new(BoardService::with_config(store, config));
            let listener = TcpListener::bind(&bind).await?;
            println!("Serving boards on {}", listener.local_addr()?);
            serve_tcp(listener, service).await?;
        }
        Commands::Client { connect, action } => {
            let stub = Stub::new(TcpTransport::connect(&connect).await?);
            run_client(&stub, action).await?;
        }
        Commands::Demo { size, seed } => run_demo(size, seed).await?,
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn run_client<A: BoardApi>(api: &A, action: ClientAction) -> anyhow::Result<()> {
    match action {
        ClientAction::Create { size } => {
            let id = api.create_board(size).await?;
            println!("{}", id);
        }
        ClientAction::Show { id, reveal } => {
            let board = api.get_board(&GridId::new(id)).await?;
            print_board(&board, reveal);
        }
        ClientAction::AddShip {
            id,
            length,
            row,
            col,
            direction,
        } => {
            let ship = ShipPlacement::new(length, row, col, direction.into());
            let added = api.add_ship(&GridId::new(id), ship).await?;
            println!("Ship added: {}", added);
        }
        ClientAction::Attack { id, row, col } => {
            let hit = api.attack(&GridId::new(id), row, col).await?;
            println!("{}", if hit { "Hit" } else { "Miss" });
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn run_demo(size: i32, seed: Option<u64>) -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    store.connect().await?;
    let config = ServiceConfig {
        seed,
        ..ServiceConfig::default()
    };
    let service = BoardService::with_config(store, config);

    let (server_end, client_end) = InMemoryTransport::pair();
    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(service, server_end);
        skeleton.run().await
    });

    let stub = Stub::new(client_end);
    let id = stub.create_board(size).await?;
    println!("Created board {}", id);

    let ship = ShipPlacement::horizontal(size.min(5), 0, 0);
    let added = stub.add_ship(&id, ship).await?;
    println!("Placed {:?}: {}", ship, added);

    for (row, col) in [(0, 0), (0, 0), (1, 1), (0, 1)] {
        let hit = stub.attack(&id, row, col).await?;
        println!("Attack ({}, {}): {}", row, col, if hit { "Hit" } else { "Miss" });
    }

    let board = stub.get_board(&id).await?;
    print_board(&board, true);

    drop(stub);
    server.await??;
    Ok(())
}
