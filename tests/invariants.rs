//! Property tests that hold across arbitrary random seed patterns advanced
//! several generations: population conservation and the alive-box-within-
//! occupied-box containment invariant.

use ca_engine::engines::transition;
use ca_engine::engines::LifeLikeEngine;
use ca_engine::grid::{BitPlane, ColourGrid, TileMask};
use ca_engine::rules::{ConwayRule, Rule};
use ca_engine::shapes::cumulative::MooreCumulative;
use ca_engine::shapes::{CellPredicate, ShapeContext};
use proptest::prelude::*;

const SIZE: usize = 40;

fn full_dirty(width: usize, height: usize) -> TileMask {
    let mut mask = TileMask::for_colour_grid(width, height);
    let (tile_cols, tile_rows) = mask.tile_dimensions();
    for ty in 0..tile_rows {
        for tx in 0..tile_cols {
            mask.set(tx as i64, ty as i64);
        }
    }
    mask
}

fn random_seed() -> impl Strategy<Value = Vec<(i32, i32)>> {
    proptest::collection::vec((4i32..SIZE as i32 - 4, 4i32..SIZE as i32 - 4), 0..60)
}

proptest! {
    #[test]
    fn life_like_population_is_conserved_across_generations(seed in random_seed()) {
        let combo = ConwayRule.combo_list();
        let engine = LifeLikeEngine::new(&combo);

        let mut current = BitPlane::new(SIZE, SIZE);
        for &(x, y) in &seed {
            current.set(x as i64, y as i64, true);
        }
        let mut population = current.count_alive() as u64;

        for gen in 0..5 {
            let mut next = BitPlane::new(SIZE, SIZE);
            let dirty = full_dirty(SIZE, SIZE);
            let mut next_dirty = TileMask::for_colour_grid(SIZE, SIZE);
            let stats = engine.step(&current, &mut next, &dirty, &mut next_dirty, gen % 2 == 1);

            prop_assert_eq!(population + stats.births - stats.deaths, stats.population);
            prop_assert_eq!(next.count_alive() as u64, stats.population);

            population = stats.population;
            current = next;
        }
    }

    #[test]
    fn two_state_alive_box_stays_within_occupied_box(seed in random_seed()) {
        let combo = ConwayRule.combo_list();
        let mut grid = ColourGrid::new(SIZE, SIZE).unwrap();
        for &(x, y) in &seed {
            grid.set(x, y, 64);
        }

        for _ in 0..4 {
            let ctx = ShapeContext {
                colour: &grid,
                predicate: CellPredicate::TwoState { alive_start: 64 },
                left_x: 1,
                bottom_y: 1,
                right_x: SIZE as i32 - 2,
                top_y: SIZE as i32 - 2,
                xrange: 1,
                yrange: 1,
            };
            let table = MooreCumulative::build(&ctx);
            let width = (ctx.right_x - ctx.left_x + 1) as usize;
            let height = (ctx.top_y - ctx.bottom_y + 1) as usize;
            let mut counts = vec![0i32; width * height];
            for y in ctx.bottom_y..=ctx.top_y {
                for x in ctx.left_x..=ctx.right_x {
                    let row_base = (y - ctx.bottom_y) as usize * width;
                    counts[row_base + (x - ctx.left_x) as usize] =
                        table.query(x - 1, y - 1, x + 1, y + 1) - ctx.indicator(x, y);
                }
            }
            transition::apply_two_state(
                &mut grid, &counts, width, ctx.left_x, ctx.bottom_y, ctx.right_x, ctx.top_y,
                &combo, &ca_engine::config::StateThresholds::two_state_default(),
            );

            let occupied = grid.occupied_box();
            let alive = grid.alive_box();
            if !alive.is_empty() {
                prop_assert!(!occupied.is_empty());
                prop_assert!(occupied.min_x <= alive.min_x);
                prop_assert!(occupied.min_y <= alive.min_y);
                prop_assert!(occupied.max_x >= alive.max_x);
                prop_assert!(occupied.max_y >= alive.max_y);
            }
        }
    }
}
