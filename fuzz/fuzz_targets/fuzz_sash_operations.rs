#![no_main]

use arbitrary::Arbitrary;
use bwin_layout::{
    LayoutConfig, Point, Position, Rect, ResizeStrategy, SashTree, SplitSize, Store,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Split { leaf: u8, edge: u8, size: u16, absolute: bool },
    Remove { leaf: u8 },
    Swap { first: u8, second: u8 },
    SetWidth { sash: u8, width: u16 },
    SetHeight { sash: u8, height: u16 },
    SetLeft { sash: u8, left: i16 },
    SetTop { sash: u8, top: i16 },
    MoveMuntin { sash: u8, delta: i16 },
    Natural { sash: u8 },
    Drop { leaf: u8, x: u16, y: u16 },
}

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    height: u16,
    ops: Vec<Op>,
}

const EDGES: [Position; 4] = [Position::Left, Position::Right, Position::Top, Position::Bottom];

fn pick(ids: &[String], index: u8) -> &str {
    &ids[usize::from(index) % ids.len()]
}

fuzz_target!(|input: Input| {
    let config = LayoutConfig {
        min_width: 20.0,
        min_height: 20.0,
        ..LayoutConfig::default()
    };
    let rect = Rect::from_size(
        f64::from(input.width.max(1)),
        f64::from(input.height.max(1)),
    );
    let Ok(mut tree) = SashTree::with_root(config, "root", rect, Store::new()) else {
        return;
    };
    let classifier = tree.config().zone_classifier().expect("default inset is valid");

    for op in input.ops.iter().take(256) {
        let leaves: Vec<String> = tree
            .all_leaf_descendants()
            .iter()
            .map(|sash| sash.id().to_string())
            .collect();
        let ids: Vec<String> = tree.all_ids().into_iter().map(str::to_string).collect();

        // Errors are fine; broken invariants are not.
        let _ = match *op {
            Op::Split { leaf, edge, size, absolute } => {
                let size = if absolute {
                    SplitSize::Absolute(f64::from(size.max(1)))
                } else {
                    SplitSize::Ratio(f64::from(size % 999 + 1) / 1000.0)
                };
                tree.split(pick(&leaves, leaf), EDGES[usize::from(edge) % 4], size)
                    .map(drop)
            }
            Op::Remove { leaf } => tree.remove(pick(&leaves, leaf)).map(drop),
            Op::Swap { first, second } => {
                tree.swap(pick(&leaves, first), pick(&leaves, second))
            }
            Op::SetWidth { sash, width } => tree
                .set_width(pick(&ids, sash), f64::from(width.max(1)))
                .map(drop),
            Op::SetHeight { sash, height } => tree
                .set_height(pick(&ids, sash), f64::from(height.max(1)))
                .map(drop),
            Op::SetLeft { sash, left } => {
                tree.set_left(pick(&ids, sash), f64::from(left)).map(drop)
            }
            Op::SetTop { sash, top } => tree.set_top(pick(&ids, sash), f64::from(top)).map(drop),
            Op::MoveMuntin { sash, delta } => {
                tree.move_muntin(pick(&ids, sash), f64::from(delta)).map(drop)
            }
            Op::Natural { sash } => {
                tree.set_resize_strategy(pick(&ids, sash), ResizeStrategy::Natural)
            }
            Op::Drop { leaf, x, y } => {
                let pointer = Point::new(f64::from(x), f64::from(y));
                match tree.drop_intent(pointer, &classifier) {
                    Some(intent) => tree.apply_drop(pick(&leaves, leaf), &intent).map(drop),
                    None => Ok(()),
                }
            }
        };

        if let Err(violation) = tree.check_invariants() {
            panic!("invariant broken after {op:?}: {violation}");
        }
    }
});
