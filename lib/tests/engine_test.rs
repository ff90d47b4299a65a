use rs_wordsearch_solver::*;

#[test]
fn search_finds_word_going_south() {
    let grid = create_grid(&["ABC", "DEF", "GHI"]);

    let found = search(&grid, &["ADG"]);

    assert_eq!(found.len(), 1);
    let occurrences = found.get("ADG").unwrap();
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].direction, Direction::South);
    assert_eq!(
        occurrences[0].path,
        vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
    );
}

#[test]
fn search_counts_every_start_and_direction_pair() {
    // In a 3x3 grid of A's, "AA" fits wherever the second cell stays in
    // bounds: 3 ways from each corner, 5 from each edge midpoint, 8 from the
    // center, 4 * 3 + 4 * 5 + 8 = 40 in total.
    let grid = create_grid(&["AAA", "AAA", "AAA"]);

    let found = search(&grid, &["AA"]);

    assert_eq!(found.get("AA").unwrap().len(), 40);
}

#[test]
fn search_missing_word_is_absent() {
    let grid = create_grid(&["XY", "ZW"]);

    let found = search(&grid, &["Q"]);

    assert!(found.is_empty());
    assert!(!found.contains("Q"));
    assert_eq!(found.get("Q"), None);
}

#[test]
fn search_finds_word_and_its_reverse() {
    let grid = create_grid(&["CAT"]);

    let found = search(&grid, &["CAT", "TAC"]);

    let cat = found.get("CAT").unwrap();
    assert_eq!(cat.len(), 1);
    assert_eq!(cat[0].direction, Direction::East);
    assert_eq!(
        cat[0].path,
        vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
    );

    let tac = found.get("TAC").unwrap();
    assert_eq!(tac.len(), 1);
    assert_eq!(tac[0].direction, Direction::West);
    assert_eq!(
        tac[0].path,
        vec![Point::new(0, 2), Point::new(0, 1), Point::new(0, 0)]
    );
}

#[test]
fn search_single_letter_matches_once_per_direction() {
    let grid = create_grid(&["AB", "BA"]);

    let found = search(&grid, &["A"]);

    let occurrences = found.get("A").unwrap();
    assert_eq!(occurrences.len(), 16);

    let at_origin: Vec<&Occurrence> = occurrences
        .iter()
        .filter(|occurrence| occurrence.path == vec![Point::new(0, 0)])
        .collect();
    assert_eq!(at_origin.len(), 8);
    let directions: Vec<Direction> = at_origin
        .iter()
        .map(|occurrence| occurrence.direction)
        .collect();
    assert_eq!(directions, Direction::ALL.to_vec());
}

#[test]
fn search_records_overlapping_occurrences() {
    let grid = create_grid(&["SEES"]);

    let found = search(&grid, &["SEE"]);

    let occurrences = found.get("SEE").unwrap();
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0].direction, Direction::East);
    assert_eq!(occurrences[0].start(), Some(Point::new(0, 0)));
    assert_eq!(occurrences[1].direction, Direction::West);
    assert_eq!(occurrences[1].start(), Some(Point::new(0, 3)));
}

#[test]
fn search_finds_diagonals_both_ways() {
    let grid = create_grid(&["GXX", "XOX", "XXD"]);

    let found = search(&grid, &["GOD", "DOG"]);

    let god = found.get("GOD").unwrap();
    assert_eq!(god.len(), 1);
    assert_eq!(god[0].direction, Direction::SouthEast);
    assert_eq!(
        god[0].path,
        vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
    );

    let dog = found.get("DOG").unwrap();
    assert_eq!(dog.len(), 1);
    assert_eq!(dog[0].direction, Direction::NorthWest);
    assert_eq!(
        dog[0].path,
        vec![Point::new(2, 2), Point::new(1, 1), Point::new(0, 0)]
    );
}

#[test]
fn search_finds_anti_diagonals() {
    let grid = create_grid(&["XXC", "XAX", "TXX"]);

    let found = search(&grid, &["CAT"]);

    let occurrences = found.get("CAT").unwrap();
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].direction, Direction::SouthWest);
    assert_eq!(
        occurrences[0].path,
        vec![Point::new(0, 2), Point::new(1, 1), Point::new(2, 0)]
    );
}

#[test]
fn search_has_no_partial_matches() {
    let grid = create_grid(&["CAT"]);

    let found = search(&grid, &["CATS", "CATALOG"]);

    assert!(found.is_empty());
}

#[test]
fn search_preserves_word_list_order() {
    let grid = create_grid(&["DOG", "CAT"]);

    let found = search(&grid, &["ZEBRA", "CAT", "DOG"]);

    assert_eq!(found.words().collect::<Vec<_>>(), vec!["CAT", "DOG"]);
}

#[test]
fn search_skips_empty_words() {
    let grid = create_grid(&["AB"]);

    let found = search(&grid, &["", "AB"]);

    assert_eq!(found.len(), 1);
    assert!(found.contains("AB"));
}

#[test]
fn search_collapses_duplicate_words_into_one_entry() {
    let grid = create_grid(&["CAT"]);

    let found = search(&grid, &["CAT", "CAT"]);

    assert_eq!(found.len(), 1);
    assert_eq!(found.get("CAT").unwrap().len(), 1);
}

#[test]
fn search_empty_grid_and_empty_word_list_yield_nothing() {
    let empty_grid = Grid::from_rows::<&str>(&[]).unwrap();
    assert!(search(&empty_grid, &["CAT"]).is_empty());

    let grid = create_grid(&["CAT"]);
    assert!(search(&grid, &[] as &[&str]).is_empty());
}

#[test]
fn search_twice_gives_identical_results() {
    let grid = create_grid(&["SEES", "EAAS", "EAAE", "SSES"]);
    let words = ["SEE", "SEES", "A"];

    assert_eq!(search(&grid, &words), search(&grid, &words));
}

#[test]
fn par_search_matches_search() {
    let grid = create_grid(&["HELLO", "APPLE", "WORLD", "STARS", "MOONS"]);
    let words = ["HELLO", "APPLE", "WORLD", "HAWSM", "HPRRS", "OEDSS", "S", "XYZZY"];

    assert_eq!(par_search(&grid, &words), search(&grid, &words));
}

#[test]
fn occurrences_stay_in_bounds_and_spell_their_words() {
    let grid = create_grid(&["HELLO", "APPLE", "WORLD", "STARS", "MOONS"]);
    let words = [
        "HELLO", "APPLE", "WORLD", "STARS", "MOONS", "HAWSM", "HPRRS", "OEDSS", "XYZZY",
    ];

    let found = search(&grid, &words);

    assert_eq!(found.len(), 8);
    assert!(!found.contains("XYZZY"));
    for (word, occurrences) in found.iter() {
        for occurrence in occurrences {
            for point in &occurrence.path {
                assert!(point.row < grid.num_rows());
                assert!(point.col < grid.num_cols());
            }
            let spelled: String = occurrence
                .path
                .iter()
                .filter_map(|point| grid.get(*point))
                .collect();
            assert_eq!(spelled, word);
        }
    }
}

#[test]
fn match_word_at_returns_the_exact_path() {
    let grid = create_grid(&["ABC", "DEF"]);
    let word: Vec<char> = "BE".chars().collect();

    assert_eq!(
        match_word_at(&grid, &word, Point::new(0, 1), Direction::South),
        Some(vec![Point::new(0, 1), Point::new(1, 1)])
    );
}

#[test]
fn match_word_at_fails_out_of_bounds() {
    let grid = create_grid(&["ABC", "DEF"]);
    let word: Vec<char> = "BE".chars().collect();

    assert_eq!(
        match_word_at(&grid, &word, Point::new(0, 1), Direction::North),
        None
    );
}

#[test]
fn match_word_at_fails_on_a_wrong_letter() {
    let grid = create_grid(&["ABC", "DEF"]);
    let word: Vec<char> = "BE".chars().collect();

    assert_eq!(
        match_word_at(&grid, &word, Point::new(0, 0), Direction::South),
        None
    );
}

fn create_grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).unwrap()
}
