use liblife::{Grid, Position};

fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows[0].len();

    let mut grid = Grid::new(width, height).unwrap();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == '#' {
                grid.set_alive(Position { row, col }).unwrap();
            }
        }
    }

    grid
}

fn rows_from_grid(grid: &Grid) -> Vec<String> {
    (0..grid.height())
        .map(|row| {
            (0..grid.width())
                .map(|col| {
                    if grid.is_alive(Position { row, col }).unwrap() {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

fn assert_step(grid: &mut Grid, expected: &[&str]) {
    grid.step();
    assert_eq!(rows_from_grid(grid), expected);
}

#[test]
fn a_dead_grid_is_a_fixed_point() {
    let mut grid = Grid::new(6, 4).unwrap();

    grid.step();

    assert_eq!(grid.population(), 0);
}

#[test]
fn a_block_is_a_still_life() {
    let block = &[
        "....", //
        ".##.", //
        ".##.", //
        "....", //
    ];
    let mut grid = grid_from_rows(block);

    assert_step(&mut grid, block);
    assert_step(&mut grid, block);
}

#[test]
fn a_blinker_oscillates_with_period_two() {
    let horizontal = &[
        ".....", //
        ".....", //
        ".###.", //
        ".....", //
        ".....", //
    ];
    let vertical = &[
        ".....", //
        "..#..", //
        "..#..", //
        "..#..", //
        ".....", //
    ];
    let mut grid = grid_from_rows(horizontal);

    assert_step(&mut grid, vertical);
    assert_step(&mut grid, horizontal);
}

#[test]
fn a_glider_walks_across_the_grid() {
    let mut grid = grid_from_rows(&[
        ".#...", //
        "..#..", //
        "###..", //
        ".....", //
        ".....", //
    ]);

    assert_step(
        &mut grid,
        &[
            ".....", //
            "#.#..", //
            ".##..", //
            ".#...", //
            ".....", //
        ],
    );
}

#[test]
fn the_edge_does_not_wrap_around() {
    // A vertical blinker hugging the right edge. Its horizontal phase loses
    // the cell that would lie beyond the border; with a toroidal topology it
    // would reappear in column 0 instead.
    let mut grid = grid_from_rows(&[
        ".....", //
        "....#", //
        "....#", //
        "....#", //
        ".....", //
    ]);

    assert_step(
        &mut grid,
        &[
            ".....", //
            ".....", //
            "...##", //
            ".....", //
            ".....", //
        ],
    );
}

#[test]
fn step_reads_only_the_previous_generation() {
    // Updating a horizontal blinker in place, row by row, would first birth
    // (1, 2) and then see it when evaluating (2, 1), keeping (2, 1) alive
    // with two neighbors. The simultaneous update leaves exactly the
    // vertical phase, with (2, 1) dead.
    let mut grid = grid_from_rows(&[
        ".....", //
        ".....", //
        ".###.", //
        ".....", //
        ".....", //
    ]);

    grid.step();

    assert_eq!(grid.is_alive(Position::new(2, 1)), Ok(false));
    assert_eq!(
        rows_from_grid(&grid),
        &[
            ".....", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....", //
        ]
    );
}
