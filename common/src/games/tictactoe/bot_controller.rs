use crate::games::SessionRng;
use super::board::{available_corners, available_moves, empty_cells, is_full};
use super::difficulty::Difficulty;
use super::types::{Board, Mark, CENTER, COMPUTER_MARK};
use super::win_detector::{evaluate_winner, WIN_PATTERNS};

const WIN_SCORE: i32 = 10;

const EASY_RANDOM_RATE: f64 = 0.8;
const EASY_BLOCK_RATE: f64 = 0.5;
const MEDIUM_RANDOM_RATE: f64 = 0.4;
const HARD_RANDOM_RATE: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    select_move_as(&input.board, input.bot_mark, difficulty, rng)
}

/// Picks the computer's (`O`) next cell for the given tier.
///
/// Returns `None` only when the board has no empty cell left.
pub fn select_move(board: &Board, difficulty: Difficulty, rng: &mut SessionRng) -> Option<usize> {
    select_move_as(board, COMPUTER_MARK, difficulty, rng)
}

pub fn select_move_as(
    board: &Board,
    bot_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let available = available_moves(board);

    if available.is_empty() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => easy_move(board, opponent_mark, &available, rng),
        Difficulty::Medium => medium_move(board, bot_mark, opponent_mark, &available, rng),
        Difficulty::Hard => {
            if rng.chance(HARD_RANDOM_RATE) {
                return rng.pick(&available);
            }
            optimal_move(board, bot_mark, opponent_mark)
        }
        Difficulty::Insane => optimal_move(board, bot_mark, opponent_mark),
    }
}

fn easy_move(
    board: &Board,
    opponent_mark: Mark,
    available: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    if rng.chance(EASY_RANDOM_RATE) {
        return rng.pick(available);
    }

    // The coin is only flipped when there is something to block.
    if let Some(block) = find_tactical_move(board, opponent_mark)
        && rng.chance(EASY_BLOCK_RATE)
    {
        return Some(block);
    }

    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    rng.pick(available)
}

fn medium_move(
    board: &Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    available: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    if rng.chance(MEDIUM_RANDOM_RATE) {
        return rng.pick(available);
    }

    find_tactical_move(board, bot_mark)
        .or_else(|| find_tactical_move(board, opponent_mark))
        .or_else(|| board.is_empty_at(CENTER).then_some(CENTER))
        .or_else(|| rng.pick(&available_corners(board)))
        .or_else(|| rng.pick(available))
}

fn optimal_move(board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<usize> {
    find_tactical_move(board, bot_mark)
        .or_else(|| find_tactical_move(board, opponent_mark))
        .or_else(|| best_move_for(board, bot_mark))
}

/// Finds the empty cell of a line where `player` already holds the other two.
///
/// Called with the bot's own mark this is a winning move, with the opponent's
/// mark it is a block. Lines are checked in [`WIN_PATTERNS`] order and the
/// first hit is returned.
pub fn find_tactical_move(board: &Board, player: Mark) -> Option<usize> {
    if player == Mark::Empty {
        return None;
    }

    let cells = board.cells();
    WIN_PATTERNS.iter().find_map(|pattern| {
        let owned = pattern.iter().filter(|&&i| cells[i] == player).count();
        let mut empty = pattern.iter().copied().filter(|&i| cells[i] == Mark::Empty);
        let target = empty.next()?;
        (owned == 2 && empty.next().is_none()).then_some(target)
    })
}

/// Optimal move for the computer (`O`).
pub fn best_move(board: &Board) -> Option<usize> {
    best_move_for(board, COMPUTER_MARK)
}

/// Full alpha-beta search with `bot_mark` as the maximizing side.
///
/// Ties keep the lowest cell index. `None` when the board is full or
/// `bot_mark` is `Empty`.
pub fn best_move_for(board: &Board, bot_mark: Mark) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in empty_cells(board) {
        let score = move_score(board, index, bot_mark)?;
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Minimax value of `bot_mark` playing at `index`, with the opponent to reply.
///
/// Positive scores are wins for `bot_mark` (larger is sooner), negative
/// scores are losses (closer to zero is later), zero is a draw.
pub fn move_score(board: &Board, index: usize, bot_mark: Mark) -> Option<i32> {
    let opponent_mark = bot_mark.opponent()?;
    let next = board.with_mark(index, bot_mark);
    Some(minimax(&next, 0, false, bot_mark, opponent_mark, i32::MIN, i32::MAX))
}

fn minimax(
    board: &Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = evaluate_winner(board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if is_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in empty_cells(board) {
            let next = board.with_mark(index, bot_mark);
            let eval = minimax(&next, depth + 1, false, bot_mark, opponent_mark, alpha, beta);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in empty_cells(board) {
            let next = board.with_mark(index, opponent_mark);
            let eval = minimax(&next, depth + 1, true, bot_mark, opponent_mark, alpha, beta);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::games::tictactoe::types::{CELL_COUNT, CORNERS, HUMAN_MARK};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_tactical_finds_winning_cell() {
        let b = board("OO./XX./...");
        assert_eq!(find_tactical_move(&b, Mark::O), Some(2));
        assert_eq!(find_tactical_move(&b, Mark::X), Some(5));
    }

    #[test]
    fn test_tactical_uses_table_order() {
        // X threatens both row 2 (cell 8) and column 0 (cell 0); rows come first.
        let b = board(".O./XO./XX.");
        assert_eq!(find_tactical_move(&b, Mark::X), Some(8));
    }

    #[test]
    fn test_tactical_ignores_blocked_lines() {
        let b = board("XXO/.O./...");
        assert_eq!(find_tactical_move(&b, Mark::X), None);
    }

    #[test]
    fn test_tactical_none_on_empty_board() {
        assert_eq!(find_tactical_move(&Board::new(), Mark::X), None);
        assert_eq!(find_tactical_move(&Board::new(), Mark::Empty), None);
    }

    #[test]
    fn test_best_move_answers_center_with_corner() {
        let b = board(".../.X./...");
        let chosen = best_move(&b).unwrap();
        assert!([0, 2, 6, 8].contains(&chosen), "chose edge {}", chosen);
    }

    #[test]
    fn test_best_move_on_empty_board_is_center_or_corner() {
        let chosen = best_move(&Board::new()).unwrap();
        assert!([0, 2, 4, 6, 8].contains(&chosen), "chose edge {}", chosen);
    }

    #[test]
    fn test_best_move_prefers_immediate_win() {
        // O can win now at 2 or block X's row at 5; winning scores higher.
        let b = board("OO./XX./X..");
        assert_eq!(best_move(&b), Some(2));
        assert_eq!(move_score(&b, 2, Mark::O), Some(WIN_SCORE));
    }

    #[test]
    fn test_best_move_blocks_without_shortcut() {
        let b = board("XX./.O./...");
        assert_eq!(best_move(&b), Some(2));
    }

    #[test]
    fn test_best_move_full_board() {
        assert_eq!(best_move(&board("XOXXOOOXX")), None);
    }

    #[test]
    fn test_best_move_for_empty_mark() {
        assert_eq!(best_move_for(&Board::new(), Mark::Empty), None);
    }

    #[test]
    fn test_insane_blocks_human_pair() {
        let b = board("XX..O....");
        let mut rng = SessionRng::new(42);
        assert_eq!(select_move(&b, Difficulty::Insane, &mut rng), Some(2));
    }

    #[test]
    fn test_single_empty_cell_always_chosen() {
        let b = board("XOX/XO./OXO");
        for difficulty in Difficulty::ALL {
            for seed in 0..20 {
                let mut rng = SessionRng::new(seed);
                assert_eq!(select_move(&b, difficulty, &mut rng), Some(5));
            }
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOXXOOOXX");
        for difficulty in Difficulty::ALL {
            let mut rng = SessionRng::new(1);
            assert_eq!(select_move(&b, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_select_move_is_pure_and_seeded() {
        let b = board("X...O....");
        let before = b;
        for difficulty in Difficulty::ALL {
            for seed in 0..10 {
                let first = select_move(&b, difficulty, &mut SessionRng::new(seed));
                let second = select_move(&b, difficulty, &mut SessionRng::new(seed));
                assert_eq!(first, second);
                assert_eq!(b, before);
            }
        }
    }

    #[test]
    fn test_every_choice_is_legal() {
        let b = board("X.O/.X./...");
        for difficulty in Difficulty::ALL {
            for seed in 0..100 {
                let chosen = select_move(&b, difficulty, &mut SessionRng::new(seed)).unwrap();
                assert!(b.is_empty_at(chosen), "{:?} picked occupied {}", difficulty, chosen);
            }
        }
    }

    #[test]
    fn test_insane_ignores_randomness() {
        let b = board("X........");
        let expected = select_move(&b, Difficulty::Insane, &mut SessionRng::new(0));
        for seed in 1..25 {
            assert_eq!(select_move(&b, Difficulty::Insane, &mut SessionRng::new(seed)), expected);
        }
    }

    #[test]
    fn test_medium_usually_takes_the_win() {
        let b = board("OO./XX./X..");
        let wins = (0..500)
            .filter(|&seed| select_move(&b, Difficulty::Medium, &mut SessionRng::new(seed)) == Some(2))
            .count();
        assert!(wins > 250, "medium took the win only {} times", wins);
    }

    #[test]
    fn test_easy_is_mostly_random() {
        let b = Board::new();
        let picks: HashSet<_> = (0..200)
            .filter_map(|seed| select_move(&b, Difficulty::Easy, &mut SessionRng::new(seed)))
            .collect();
        assert!(picks.len() > 5, "easy only ever picked {:?}", picks);
    }

    fn count_picks(b: &Board, difficulty: Difficulty, cells: &[usize], runs: u64) -> usize {
        (0..runs)
            .filter_map(|seed| select_move(b, difficulty, &mut SessionRng::new(seed)))
            .filter(|chosen| cells.contains(chosen))
            .count()
    }

    #[test]
    fn test_easy_blocks_about_a_quarter_of_the_time() {
        // 0.8 * 1/6 random hits, plus 0.2 * 0.5 deliberate blocks, plus
        // 0.2 * 0.5 * 1/6 random fallbacks with the centre taken.
        let b = board("XX./.O./...");
        let blocks = count_picks(&b, Difficulty::Easy, &[2], 1000);
        assert!((190..=310).contains(&blocks), "easy blocked {} of 1000", blocks);
    }

    #[test]
    fn test_easy_leans_towards_block_and_centre() {
        // Both 2 and 4 get 0.8/7 + 0.1, every other cell only 0.8/7.
        let b = board("XX.......");
        let mut counts = [0usize; CELL_COUNT];
        for seed in 0..2000 {
            let chosen = select_move(&b, Difficulty::Easy, &mut SessionRng::new(seed)).unwrap();
            counts[chosen] += 1;
        }
        assert!(counts[2] > 320, "block picked {} times", counts[2]);
        assert!(counts[4] > 320, "centre picked {} times", counts[4]);
        for cell in [3, 5, 6, 7, 8] {
            assert!(counts[cell] < 320, "cell {} picked {} times", cell, counts[cell]);
        }
    }

    #[test]
    fn test_hard_is_mostly_optimal_but_not_always() {
        // 0.9 optimal block plus 0.1 * 1/6 random hits.
        let b = board("XX./.O./...");
        let blocks = count_picks(&b, Difficulty::Hard, &[2], 1000);
        assert!(blocks > 870, "hard blocked only {} of 1000", blocks);
        assert!(blocks < 970, "hard never played randomly ({} of 1000)", blocks);
    }

    #[test]
    fn test_medium_falls_back_to_corners() {
        // No win, no block, centre taken: 0.6 corner fallback plus 0.4 * 4/8.
        let b = board(".../.X./...");
        let corners = count_picks(&b, Difficulty::Medium, &CORNERS, 1000);
        assert!((740..=860).contains(&corners), "medium took a corner {} of 1000", corners);
    }

    #[test]
    fn test_calculate_move_for_x_bot() {
        let input = BotInput::new(board("XX./OO./..."), Mark::X);
        let mut rng = SessionRng::new(5);
        assert_eq!(calculate_move(Difficulty::Insane, input, &mut rng), Some(2));
    }

    fn human_never_wins(b: Board, rng: &mut SessionRng) {
        if evaluate_winner(&b).is_some() || is_full(&b) {
            assert_ne!(evaluate_winner(&b), Some(HUMAN_MARK), "human won on {}", b);
            return;
        }

        for human in available_moves(&b) {
            let after_human = b.with_mark(human, HUMAN_MARK);
            if evaluate_winner(&after_human).is_some() || is_full(&after_human) {
                assert_ne!(evaluate_winner(&after_human), Some(HUMAN_MARK), "human won on {}", after_human);
                continue;
            }
            let reply = select_move(&after_human, Difficulty::Insane, rng).unwrap();
            human_never_wins(after_human.with_mark(reply, COMPUTER_MARK), rng);
        }
    }

    #[test]
    fn test_insane_survives_every_human_strategy() {
        let mut rng = SessionRng::new(42);
        human_never_wins(Board::new(), &mut rng);
    }

    #[test]
    fn test_insane_draws_against_perfect_human() {
        let mut rng = SessionRng::new(42);
        for opening in 0..9 {
            let mut b = Board::new().with_mark(opening, HUMAN_MARK);
            let mut mark = COMPUTER_MARK;
            while evaluate_winner(&b).is_none() && !is_full(&b) {
                let index = if mark == COMPUTER_MARK {
                    select_move(&b, Difficulty::Insane, &mut rng)
                } else {
                    best_move_for(&b, HUMAN_MARK)
                }
                .unwrap();
                b = b.with_mark(index, mark);
                mark = mark.opponent().unwrap();
            }
            assert_eq!(evaluate_winner(&b), None, "opening {} ended {}", opening, b);
        }
    }

    fn collect_computer_turns(b: Board, to_move: Mark, seen: &mut HashSet<Board>) {
        if evaluate_winner(&b).is_some() || is_full(&b) {
            return;
        }
        if to_move == COMPUTER_MARK && !seen.insert(b) {
            return;
        }
        for index in available_moves(&b) {
            let next_mark = to_move.opponent().unwrap();
            collect_computer_turns(b.with_mark(index, to_move), next_mark, seen);
        }
    }

    #[test]
    fn test_tactical_shortcut_never_changes_outcome() {
        let mut positions = HashSet::new();
        collect_computer_turns(Board::new(), HUMAN_MARK, &mut positions);
        assert!(!positions.is_empty());

        for b in positions {
            let shortcut = optimal_move(&b, COMPUTER_MARK, HUMAN_MARK).unwrap();
            let searched = best_move(&b).unwrap();
            assert_eq!(
                move_score(&b, shortcut, COMPUTER_MARK),
                move_score(&b, searched, COMPUTER_MARK),
                "board {}",
                b
            );
        }
    }
}
