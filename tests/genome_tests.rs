#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use critters::simulation::error::Error;
use critters::simulation::genome::{Color, Genome, MAX_MUTATIONS};
use ndarray::Array2;

fn filled_genome(value: f32, color: Color) -> Genome {
    Genome::new(
        color,
        Array2::from_elem((8, 9), value),
        Array2::from_elem((2, 9), value),
    )
    .expect("valid shapes")
}

fn changed_entries(a: &Array2<f32>, b: &Array2<f32>) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

#[test]
fn test_random_genome_shapes_and_range() {
    let genome = Genome::random(8, 20.0);

    assert_eq!(genome.hidden_weights().dim(), (8, 9));
    assert_eq!(genome.output_weights().dim(), (2, 9));
    assert_eq!(genome.hidden_units(), 8);
    assert!(genome.validate().is_ok());

    for &w in genome.hidden_weights().iter().chain(genome.output_weights().iter()) {
        assert!((-20.0..=20.0).contains(&w), "weight {w} out of range");
    }
}

#[test]
fn test_random_genome_hidden_size_is_configurable() {
    let genome = Genome::random(12, 1.0);
    assert_eq!(genome.hidden_weights().dim(), (12, 9));
    assert_eq!(genome.output_weights().dim(), (2, 13));
}

#[test]
fn test_random_color_band() {
    for _ in 0..100 {
        let color = Color::random();
        for channel in [color.r, color.g, color.b] {
            assert!((50..250).contains(&channel));
        }
    }
}

#[test]
fn test_color_display() {
    let color = Color { r: 50, g: 100, b: 249 };
    assert_eq!(color.to_string(), "rgb(50, 100, 249)");
}

#[test]
fn test_random_population_size() {
    let population = Genome::random_population(17, 8, 20.0);
    assert_eq!(population.len(), 17);
    assert_ne!(population[0], population[1]);
}

#[test]
fn test_new_rejects_bad_shapes() {
    let color = Color { r: 100, g: 100, b: 100 };

    let not_multiple_of_four = Genome::new(color, Array2::zeros((6, 9)), Array2::zeros((2, 7)));
    assert!(matches!(not_multiple_of_four, Err(Error::InvalidGenome(_))));

    let wrong_inputs = Genome::new(color, Array2::zeros((8, 5)), Array2::zeros((2, 9)));
    assert!(matches!(wrong_inputs, Err(Error::InvalidGenome(_))));

    let wrong_outputs = Genome::new(color, Array2::zeros((8, 9)), Array2::zeros((3, 9)));
    assert!(matches!(wrong_outputs, Err(Error::InvalidGenome(_))));

    let mismatched = Genome::new(color, Array2::zeros((8, 9)), Array2::zeros((2, 5)));
    assert!(matches!(mismatched, Err(Error::InvalidGenome(_))));

    let empty = Genome::new(color, Array2::zeros((0, 9)), Array2::zeros((2, 1)));
    assert!(matches!(empty, Err(Error::InvalidGenome(_))));
}

#[test]
fn test_self_mating_keeps_shape_and_mutates_little() {
    let parent = Genome::random(8, 20.0);

    for _ in 0..200 {
        let child = parent.reproduce(&parent, 20.0);

        assert_eq!(child.hidden_weights().dim(), parent.hidden_weights().dim());
        assert_eq!(child.output_weights().dim(), parent.output_weights().dim());
        assert_eq!(child.color(), parent.color());

        let changed = changed_entries(child.hidden_weights(), parent.hidden_weights())
            + changed_entries(child.output_weights(), parent.output_weights());
        assert!(changed <= MAX_MUTATIONS, "{changed} entries changed");
    }
}

#[test]
fn test_mutation_is_rare_and_favors_output_weights() {
    let parent = Genome::random(8, 20.0);
    let mut hidden_changes = 0;
    let mut output_changes = 0;
    let rounds = 1000;

    for _ in 0..rounds {
        let child = parent.reproduce(&parent, 20.0);
        hidden_changes += changed_entries(child.hidden_weights(), parent.hidden_weights());
        output_changes += changed_entries(child.output_weights(), parent.output_weights());
    }

    // About one mutation per child on average, one in 32 of them hidden.
    let mean = (hidden_changes + output_changes) as f32 / rounds as f32;
    assert!(mean < 2.0, "mean of {mean} mutations per child");
    assert!(hidden_changes < output_changes);
}

#[test]
fn test_crossover_inherits_hidden_blocks_and_output_columns() {
    let mommy = filled_genome(1.0, Color { r: 60, g: 60, b: 60 });
    let daddy = filled_genome(-1.0, Color { r: 200, g: 200, b: 200 });

    for _ in 0..50 {
        let child = mommy.reproduce(&daddy, 20.0);
        let inherited = |w: f32| w == 1.0 || w == -1.0;

        let hidden = child.hidden_weights();
        for block in 0..2 {
            for col in 0..hidden.ncols() {
                let values: Vec<f32> = (block * 4..block * 4 + 4)
                    .map(|row| hidden[[row, col]])
                    .filter(|&w| inherited(w))
                    .collect();
                assert!(
                    values.windows(2).all(|pair| pair[0] == pair[1]),
                    "block {block} column {col} mixes parents: {values:?}"
                );
            }
        }

        let output = child.output_weights();
        for col in 0..output.ncols() {
            let values: Vec<f32> = output
                .column(col)
                .iter()
                .copied()
                .filter(|&w| inherited(w))
                .collect();
            assert!(values.windows(2).all(|pair| pair[0] == pair[1]));
        }

        let fresh = hidden.iter().chain(output.iter()).filter(|&&w| !inherited(w)).count();
        assert!(fresh <= MAX_MUTATIONS);

        assert!(child.color() == mommy.color() || child.color() == daddy.color());
    }
}

#[test]
fn test_crossover_mixes_both_parents() {
    let mommy = filled_genome(1.0, Color { r: 60, g: 60, b: 60 });
    let daddy = filled_genome(-1.0, Color { r: 200, g: 200, b: 200 });

    let mut from_mommy = 0;
    let mut from_daddy = 0;
    for _ in 0..20 {
        let child = mommy.reproduce(&daddy, 20.0);
        for &w in child.hidden_weights().iter() {
            if w == 1.0 {
                from_mommy += 1;
            } else if w == -1.0 {
                from_daddy += 1;
            }
        }
    }

    assert!(from_mommy > 0);
    assert!(from_daddy > 0);
}

#[test]
#[should_panic(expected = "same hidden weight shape")]
fn test_reproduce_rejects_mismatched_parents() {
    let small = Genome::random(8, 20.0);
    let large = Genome::random(12, 20.0);
    let _ = small.reproduce(&large, 20.0);
}
