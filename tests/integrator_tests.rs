use hula::grid::{Grid, Neighbor};
use hula::integrator::spring_force;
use hula::spring::{self, RowCoefficients};
use hula::{NoOpTickObserver, Skirt, SkirtConfig, Vec3, X_RES, Y_RES};

fn settle(skirt: &mut Skirt<f64>, ticks: usize) {
    for _ in 0..ticks {
        skirt.tick(&mut NoOpTickObserver);
    }
}

#[test]
fn energy_dissipates_after_impulse() {
    let mut skirt: Skirt<f64> = Skirt::new(SkirtConfig::new()).unwrap();
    settle(&mut skirt, 400);

    skirt.apply_impulse(Vec3::new(0.2, 0.0, 0.0));
    let e0 = skirt.kinetic_energy();
    assert!(e0 > 50.0, "impulse too weak: {}", e0);

    let mut early = 0.0;
    let mut late = 0.0;
    for t in 0..300 {
        skirt.tick(&mut NoOpTickObserver);
        let e = skirt.kinetic_energy();
        assert!(e.is_finite());
        if t < 50 {
            early += e;
        } else if t >= 250 {
            late += e;
        }
    }
    let e_final = skirt.kinetic_energy();
    assert!(e_final < e0 * 0.01, "energy {} -> {}", e0, e_final);
    assert!(late < early * 0.01, "early window {} late window {}", early, late);
}

#[test]
fn hem_sags_under_gravity() {
    let mut skirt: Skirt<f64> = Skirt::new(SkirtConfig::new()).unwrap();
    let generated = skirt.positions().row(Y_RES - 1).to_vec();
    settle(&mut skirt, 300);

    for (before, after) in generated.iter().zip(skirt.positions().row(Y_RES - 1)) {
        assert!(after.y < before.y - 0.5, "hem at {} from {}", after.y, before.y);
    }
}

#[test]
fn seam_wraps_to_last_column() {
    let skirt: Skirt<f64> = Skirt::new(SkirtConfig::new()).unwrap();
    let positions = skirt.positions();
    for row in 0..Y_RES {
        assert_eq!(positions.neighbor(0, row, Neighbor::Left), Some((X_RES - 1, row)));
        assert_eq!(positions.neighbor(X_RES - 1, row, Neighbor::Right), Some((0, row)));
    }
}

#[test]
fn seam_vertex_pulls_on_last_column() {
    let mut skirt: Skirt<f64> = Skirt::new(SkirtConfig::new()).unwrap();
    settle(&mut skirt, 20);
    let positions: &Grid<Vec3<f64>> = skirt.positions();
    let rl = skirt.rest_length();
    let row = 6;
    let ks = RowCoefficients::for_row(row, skirt.config()).stiffness;

    let p = positions.get(0, row);
    let neighbors = [
        positions.get(0, row + 1),
        positions.get(0, row - 1),
        positions.get(X_RES - 1, row),
        positions.get(1, row),
        positions.get(1, row + 1),
        positions.get(X_RES - 1, row - 1),
    ];
    let mut expected = Vec3::zero();
    for n in neighbors {
        expected += spring::force(p, n, ks, rl);
    }
    assert_eq!(spring_force(positions, 0, row, ks, rl), expected);
}

#[test]
fn hem_has_no_springs_below() {
    let skirt: Skirt<f64> = Skirt::new(SkirtConfig::new()).unwrap();
    let positions = skirt.positions();
    let hem = Y_RES - 1;
    assert_eq!(positions.neighbor(4, hem, Neighbor::Below), None);
    assert_eq!(positions.neighbor(4, hem, Neighbor::DiagonalBelow), None);
    assert_eq!(positions.neighbor(4, hem, Neighbor::DiagonalAbove), Some((3, hem - 1)));
}

#[test]
fn driven_skirt_stays_finite() {
    let mut skirt: Skirt<f32> = Skirt::new(SkirtConfig::new()).unwrap();
    for _ in 0..15 {
        skirt.increase_amplitude();
    }
    for _ in 0..5 {
        skirt.increase_frequency();
    }
    for _ in 0..300 {
        skirt.tick(&mut NoOpTickObserver);
    }
    assert!(skirt.positions().iter().all(|p| p.is_finite()));
    assert!(skirt.velocities().iter().all(|v| v.is_finite()));
    assert!(skirt.normals().iter().all(|n| n.is_finite()));
    assert!(skirt.kinetic_energy() > 0.0);
}
