use tinsel_core::{Answers, Puzzle, PuzzleError};

const DIAL_EXAMPLE: &str = "L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

const GIFT_SHOP_EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

const LOBBY_EXAMPLE: &str = "987654321111111
811111111111119
234234234234278
818181911112111
";

const PRINTING_EXAMPLE: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

const CAFETERIA_EXAMPLE: &str = "3-5
10-14
16-20
12-18

1
5
8
11
17
32
";

#[test]
fn test_examples() {
    let cases = [
        (Puzzle::SecretEntrance, DIAL_EXAMPLE, Answers::new(3, 6)),
        (
            Puzzle::GiftShop,
            GIFT_SHOP_EXAMPLE,
            Answers::new(1227775554, 4174379265),
        ),
        (Puzzle::Lobby, LOBBY_EXAMPLE, Answers::new(357, 3121910778619)),
        (Puzzle::PrintingDepartment, PRINTING_EXAMPLE, Answers::new(13, 43)),
        (Puzzle::Cafeteria, CAFETERIA_EXAMPLE, Answers::new(3, 14)),
    ];

    for (puzzle, input, expected) in cases {
        assert_eq!(puzzle.solve(input), expected, "{}", puzzle);
    }
}

#[test]
fn test_empty_input_yields_zeros() {
    // a missing input file is read as an empty string
    for puzzle in Puzzle::ALL {
        assert_eq!(puzzle.solve(""), Answers::default(), "{}", puzzle);
    }
}

#[test]
fn test_malformed_lines_are_skipped() {
    let dial = "L68\n\nbogus\nL30\nR48\n";
    assert_eq!(Puzzle::SecretEntrance.solve(dial), Answers::new(1, 2));

    let lobby = "987654321111111\nnot-a-bank\n12\n";
    assert_eq!(Puzzle::Lobby.solve(lobby), Answers::new(98 + 12, 987654321111));
}

#[test]
fn test_extreme_values_do_not_overflow() {
    assert_eq!(
        Puzzle::SecretEntrance.solve("R18446744073709551615\n"),
        Answers::new(0, 184467440737095516)
    );
    assert_eq!(
        Puzzle::Cafeteria.solve("0-18446744073709551615\n\n5\n"),
        Answers::new(1, u64::MAX)
    );
}

#[test]
fn test_crlf_input() {
    let input = PRINTING_EXAMPLE.replace('\n', "\r\n");
    assert_eq!(Puzzle::PrintingDepartment.solve(&input), Answers::new(13, 43));
}

#[test]
fn test_day_lookup() {
    assert_eq!("4".parse::<Puzzle>(), Ok(Puzzle::PrintingDepartment));
    assert_eq!("day1".parse::<Puzzle>(), Ok(Puzzle::SecretEntrance));
    assert_eq!("Day 5".parse::<Puzzle>(), Ok(Puzzle::Cafeteria));
    assert_eq!("9".parse::<Puzzle>(), Err(PuzzleError::UnknownDay(9)));
    assert!(matches!(
        "fourth".parse::<Puzzle>(),
        Err(PuzzleError::InvalidDay(_))
    ));

    for puzzle in Puzzle::ALL {
        assert_eq!(Puzzle::try_from(puzzle.day()), Ok(puzzle));
        assert_eq!(puzzle.default_input_file(), format!("day{}.txt", puzzle.day()));
    }
}

#[test]
fn test_answers_serialize() {
    let json = serde_json::to_value(Answers::new(13, 43)).unwrap();
    assert_eq!(json, serde_json::json!({ "part1": 13, "part2": 43 }));
}
