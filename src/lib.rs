pub mod dice;
pub mod error;
pub mod prelude;
pub mod simulation;
pub mod statistics;
pub mod table;
pub mod utils;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_demo() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        // a pair of six-siders, both loaded towards six
        let mut dice = parse_dice("2d6")?.build()?;
        for die in &mut dice {
            die.change_weight(6, 5.0)?;
        }
        let dice: Vec<Box<dyn Rollable>> = dice
            .into_iter()
            .map(|die| Box::new(die) as Box<dyn Rollable>)
            .collect();

        let mut game = Game::with_roller(dice, Roller::from_seed(7))?;
        game.play(500)?;

        let analyzer = Analyzer::new(&game)?;
        let jackpots = analyzer.jackpot()?;
        assert!(jackpots <= 500);

        let face_counts = analyzer.face_counts_per_roll()?;
        assert_eq!(face_counts.n_rows(), 500);
        for (_, row) in face_counts.iter_rows() {
            assert_eq!(row.iter().sum::<u64>(), 2);
        }

        let combos = analyzer.combo_count()?;
        let total: u64 = combos.iter_rows().map(|(_, row)| row[0]).sum();
        assert_eq!(total, 500);

        let narrow = game.show("narrow".parse()?)?;
        assert_eq!(narrow.n_rows(), 1000);

        // the loading puts double sixes at 25% per roll
        let mut reference = Die::fair(6)?;
        reference.change_weight(6, 5.0)?;
        let double_six = combination_probability(&reference, &[Face::Num(6), Face::Num(6)])?;
        assert!((double_six - 0.25).abs() < 1e-12);

        let mut rendered = String::new();
        combos.pretty_print(&mut rendered)?;
        println!("{rendered}");

        Ok(())
    }
}
