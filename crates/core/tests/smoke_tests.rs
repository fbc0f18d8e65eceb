use keyroom::room::{DEFAULT_COLS, DEFAULT_ROWS, MAX_DOORS, classify};
use keyroom::{CellKind, FieldGenerator, Glyph, KeyAddressing, Pos, RoomConfig, RoomError};

fn glyph_counts(text: &str) -> [usize; 5] {
    let mut counts = [0; 5];
    for ch in text.chars().filter(|&ch| ch != '\n') {
        let glyph = Glyph::from_char(ch).unwrap_or_else(|| panic!("unexpected glyph {ch:?}"));
        counts[glyph as usize] += 1;
    }
    counts
}

#[test]
fn test_smoke_default_room_text_shape() {
    let mut generator = FieldGenerator::new(DEFAULT_ROWS, DEFAULT_COLS).expect("default size");
    let text = generator.generate_text();

    assert_eq!(text.len(), 20 * 41);
    assert!(text.ends_with('\n'));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|line| line.len() == 40));

    let counts = glyph_counts(&text);
    assert_eq!(counts[Glyph::Key as usize], 1);
    assert!(counts[Glyph::Door as usize] <= usize::from(MAX_DOORS));
    for (row, col) in [(0, 0), (19, 0), (19, 39), (0, 39)] {
        assert_eq!(lines[row].as_bytes()[col], b'#', "corner ({row}, {col})");
    }
}

#[test]
fn test_smoke_many_runs_never_exceed_four_doors() {
    let mut generator = FieldGenerator::with_seed(30, 80, 1).expect("valid size");
    let mut saw_four = false;
    for _ in 0..500 {
        let room = generator.generate();
        assert!(room.door_count() <= MAX_DOORS);
        saw_four |= room.door_count() == MAX_DOORS;
    }
    // A 30x80 border has 212 draw slots; hitting the cap is routine.
    assert!(saw_four, "large rooms should regularly reach the door cap");
}

#[test]
fn test_smoke_key_is_always_interior_with_cell_addressing() {
    for seed in 0..200 {
        let room = FieldGenerator::with_seed(7, 9, seed).expect("valid size").generate();
        let key = room.key().cell(7, 9).expect("cell addressing hits a cell");
        assert_eq!(classify(7, 9, key.y as usize, key.x as usize), CellKind::Interior);
        assert_eq!(room.glyph_at(key), Some(Glyph::Key));
        assert_eq!(room.count(Glyph::Key), 1);
    }
}

#[test]
fn test_smoke_flattened_default_room_matches_legacy_offset() {
    let mut generator = FieldGenerator::with_seed(20, 40, 404)
        .and_then(|generator| generator.with_addressing(KeyAddressing::Flattened))
        .expect("20x40 fits flattened offsets");
    for _ in 0..100 {
        let room = generator.generate();
        let pick = room.key().pick;
        let text = room.to_text();
        assert_eq!(text.find('K'), Some(pick.y as usize * 20 + pick.x as usize));
        assert_eq!(text.matches('K').count(), 1);
    }
}

#[test]
fn test_smoke_small_sizes_are_rejected_eagerly() {
    assert_eq!(
        FieldGenerator::new(2, 2).err(),
        Some(RoomError::InvalidDimensions { rows: 2, cols: 2 })
    );
    let config = RoomConfig { cols: 1, ..RoomConfig::default() };
    assert!(matches!(
        FieldGenerator::from_config(&config),
        Err(RoomError::InvalidDimensions { rows: 20, cols: 1 })
    ));
}

#[test]
fn test_smoke_corner_glyphs_via_positions() {
    let room = FieldGenerator::with_seed(4, 4, 3).expect("valid size").generate();
    for pos in [Pos { y: 0, x: 0 }, Pos { y: 3, x: 0 }, Pos { y: 3, x: 3 }, Pos { y: 0, x: 3 }] {
        assert_eq!(room.glyph_at(pos), Some(Glyph::Wall));
    }
}
