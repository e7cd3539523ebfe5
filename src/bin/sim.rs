use boardgame::{
    BoardApi, BoardService, BoardStore, InMemoryStore, ServiceConfig, ShipPlacement,
    DEFAULT_GRID_SIZE,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Ship lengths laid out one per even row, each starting at column 0.
const FLEET: [i32; 5] = [5, 4, 3, 3, 2];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: i32 = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_GRID_SIZE,
    };

    let store = InMemoryStore::new();
    store.connect().await?;
    let service = BoardService::with_config(store, ServiceConfig::with_seed(seed));
    let id = service.create_board(size).await?;

    let mut ships_placed = 0;
    for (i, &length) in FLEET.iter().enumerate() {
        let ship = ShipPlacement::horizontal(length, 2 * i as i32, 0).with_id(i as u32);
        if service.add_ship(&id, ship).await.unwrap_or(false) {
            ships_placed += 1;
        }
    }
    let ship_cells = service
        .get_board(&id)
        .await?
        .cells
        .iter()
        .filter(|c| c.is_occupied())
        .count();

    let mut rng = SmallRng::seed_from_u64(seed);
    let shots = (size * size) as usize;
    let mut hits = 0;
    for _ in 0..shots {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        if service.attack(&id, row, col).await? {
            hits += 1;
        }
    }

    let board = service.get_board(&id).await?;
    let afloat = board.cells.iter().filter(|c| c.is_occupied()).count();

    let result = json!({
        "board": id.as_str(),
        "size": size,
        "ships_placed": ships_placed,
        "ship_cells": ship_cells,
        "shots": shots,
        "hits": hits,
        "misses": shots - hits,
        "cells_afloat": afloat,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
