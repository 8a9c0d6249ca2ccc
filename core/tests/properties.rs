use chrono::{Days, NaiveDate};
use dailies_core::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_code(rng: &mut SmallRng, config: &CodeConfig) -> Code {
    let symbols: Vec<Symbol> = (0..config.code_length)
        .map(|_| rng.random_range(0..config.alphabet_size))
        .collect();
    Code::parse(&symbols, config).unwrap()
}

#[test]
fn generated_paths_are_hamiltonian() {
    let mut rng = SmallRng::seed_from_u64(0xda11);
    for _ in 0..40 {
        let size = rng.random_range(1..=6);
        let seed = rng.random_range(-1_000_000_i64..1_000_000_000);
        let config = GridConfig::new(size).with_search_budget(200_000);
        let path = generate_hamiltonian_path(config, seed);
        assert!(path.is_hamiltonian(&config), "size {size} seed {seed}");
        assert_eq!(path, generate_hamiltonian_path(config, seed));
    }
}

#[test]
fn scoring_a_path_against_itself_is_a_win() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..20 {
        let seed = rng.random_range(0..i64::from(i32::MAX));
        let path = generate_hamiltonian_path(GridConfig::DAILY_PATH, seed);
        let score = score_attempt(&path, &path.reversed());
        assert!(score.is_win());
        assert_eq!(score.percent(), 100);
    }
}

#[test]
fn evaluation_invariants_hold_for_random_codes() {
    let mut rng = SmallRng::seed_from_u64(42);
    for config in [CodeConfig::SIGNAL_LOCK, CodeConfig::SPELLCAST, CodeConfig::LINK_FIVE] {
        for _ in 0..200 {
            let secret = random_code(&mut rng, &config);
            let guess = random_code(&mut rng, &config);

            let feedback = evaluate(&guess, &secret);
            assert_eq!(
                feedback.exact_count() + feedback.present_count() + feedback.absent_count(),
                config.code_len()
            );
            assert!(evaluate(&secret, &secret).is_solved());

            // swapping roles keeps the totals
            assert_eq!(evaluate(&secret, &guess).counts(), feedback.counts());
        }
    }
}

#[test]
fn secret_always_survives_its_own_history() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let config = CodeConfig::SPELLCAST;
    for _ in 0..20 {
        let secret = random_code(&mut rng, &config);
        let mut engine = CodebreakerEngine::new(secret.symbols(), config).unwrap();
        for _ in 0..3 {
            let guess = random_code(&mut rng, &config);
            if engine.submit(guess.symbols()).unwrap().feedback.is_solved() {
                break;
            }
        }
        let remaining = engine.remaining_possibilities();
        assert!(remaining >= 1);
        assert!(candidates(engine.history(), config).any(|code| code == secret));

        engine.submit(secret.symbols()).ok();
        if engine.state() == EngineState::Won {
            assert_eq!(engine.remaining_possibilities(), 1);
        }
    }
}

#[test]
fn daily_index_advances_one_puzzle_per_day() {
    let epoch = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
    let schedule = DailySchedule::new(epoch, 5);
    let mut date = epoch - Days::new(30);
    let mut previous = schedule.index_for(date);
    for _ in 0..60 {
        date = date.succ_opt().unwrap();
        let index = schedule.index_for(date);
        assert_eq!(index, (previous + 1) % 5);
        previous = index;
    }
}

#[test]
fn rng_streams_stay_in_range() {
    let mut seeds = SmallRng::seed_from_u64(99);
    for _ in 0..50 {
        let mut rng = SeededRng::new(seeds.random_range(i64::MIN / 2..i64::MAX / 2));
        for _ in 0..100 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
            assert!(rng.next_index(5) < 5);
        }
    }
}
