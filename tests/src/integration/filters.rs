//! # Filter and Stats Consistency
//!
//! Builds a seeded random mixture of materials at every lifecycle stage and
//! checks the list and stats views agree with a locally tracked model.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use eco_02_ledger::{
        CreditFilter, LedgerApi, LedgerConfig, LedgerService, Material, MaterialFilter,
        MaterialStatus, MockTimeSource,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_types::{MaterialId, UserId};

    const MATERIALS: usize = 120;

    struct Expected {
        status: MaterialStatus,
        farmer: UserId,
        transporter: Option<UserId>,
        plant: Option<UserId>,
        credit: Option<f64>,
    }

    /// Drives each material a random number of steps down the lifecycle.
    fn build_mixture(
        seed: u64,
    ) -> (LedgerService<MockTimeSource>, HashMap<MaterialId, Expected>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let ledger =
            LedgerService::new(LedgerConfig::default(), MockTimeSource::new(0)).unwrap();

        let farmers: Vec<UserId> = (0..3).map(|_| UserId::new()).collect();
        let transporters: Vec<UserId> = (0..2).map(|_| UserId::new()).collect();
        let plants: Vec<UserId> = (0..2).map(|_| UserId::new()).collect();
        let admin = UserId::new();

        let mut expected = HashMap::new();
        for _ in 0..MATERIALS {
            let farmer = farmers[rng.gen_range(0..farmers.len())];
            let weight = rng.gen_range(10.0..2000.0);
            let material = ledger
                .register_material("corn_stover", weight, "farm", farmer)
                .unwrap();
            let mut entry = Expected {
                status: MaterialStatus::Registered,
                farmer,
                transporter: None,
                plant: None,
                credit: None,
            };

            // 0 = registered, 1 = in transit, 2 = verified, 3 = approved, 4 = rejected
            let stage = rng.gen_range(0..5);
            if stage >= 1 {
                let transporter = transporters[rng.gen_range(0..transporters.len())];
                ledger
                    .update_transport(&material.id, transporter, "road")
                    .unwrap();
                entry.status = MaterialStatus::InTransit;
                entry.transporter = Some(transporter);
            }
            if stage >= 2 {
                let plant = plants[rng.gen_range(0..plants.len())];
                let verified = rng.gen_range(1.0..weight);
                let outcome = ledger
                    .verify_material(&material.id, plant, verified)
                    .unwrap();
                entry.status = MaterialStatus::Verified;
                entry.plant = Some(plant);
                entry.credit = Some(outcome.credit.credit_value);

                if stage >= 3 {
                    let approved = stage == 3;
                    ledger
                        .decide_credit(&outcome.credit.id, approved, admin)
                        .unwrap();
                    entry.status = if approved {
                        MaterialStatus::Approved
                    } else {
                        MaterialStatus::Rejected
                    };
                }
            }
            expected.insert(material.id, entry);
        }

        (ledger, expected)
    }

    fn ids(materials: &[Material]) -> Vec<MaterialId> {
        let mut ids: Vec<MaterialId> = materials.iter().map(|m| m.id).collect();
        ids.sort();
        ids
    }

    fn expected_ids(
        expected: &HashMap<MaterialId, Expected>,
        pred: impl Fn(&Expected) -> bool,
    ) -> Vec<MaterialId> {
        let mut ids: Vec<MaterialId> = expected
            .iter()
            .filter(|(_, e)| pred(e))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_status_filters_match_model() {
        let (ledger, expected) = build_mixture(7);

        for status in MaterialStatus::ALL {
            let listed = ledger.list_materials(&MaterialFilter::all().status(status));
            assert!(listed.iter().all(|m| m.status == status));
            assert_eq!(ids(&listed), expected_ids(&expected, |e| e.status == status));
        }
    }

    #[test]
    fn test_combined_filters_match_model() {
        let (ledger, expected) = build_mixture(11);
        let farmers: Vec<UserId> = {
            let mut f: Vec<UserId> = expected.values().map(|e| e.farmer).collect();
            f.sort();
            f.dedup();
            f
        };

        for farmer in farmers {
            for status in MaterialStatus::ALL {
                let filter = MaterialFilter::all().farmer(farmer).status(status);
                let listed = ledger.list_materials(&filter);
                assert_eq!(
                    ids(&listed),
                    expected_ids(&expected, |e| e.farmer == farmer && e.status == status)
                );
            }
        }

        let transporters: Vec<UserId> =
            expected.values().filter_map(|e| e.transporter).collect();
        for transporter in transporters {
            let listed = ledger.list_materials(&MaterialFilter::all().transporter(transporter));
            assert_eq!(
                ids(&listed),
                expected_ids(&expected, |e| e.transporter == Some(transporter))
            );
        }

        let plants: Vec<UserId> = expected.values().filter_map(|e| e.plant).collect();
        for plant in plants {
            let listed = ledger.list_materials(&MaterialFilter::all().plant(plant));
            assert_eq!(ids(&listed), expected_ids(&expected, |e| e.plant == Some(plant)));
        }
    }

    #[test]
    fn test_stats_match_model() {
        let (ledger, expected) = build_mixture(23);
        let stats = ledger.stats();

        assert_eq!(stats.total_materials, MATERIALS);
        for status in MaterialStatus::ALL {
            assert_eq!(
                stats.count_for(status),
                expected.values().filter(|e| e.status == status).count()
            );
        }

        let total: f64 = expected.values().filter_map(|e| e.credit).sum();
        let approved: f64 = expected
            .values()
            .filter(|e| e.status == MaterialStatus::Approved)
            .filter_map(|e| e.credit)
            .sum();
        assert!((stats.total_carbon_credits - total).abs() < 1e-6);
        assert!((stats.approved_carbon_credits - approved).abs() < 1e-6);

        let pending = ledger.list_credits(&CreditFilter::pending());
        assert_eq!(
            pending.len(),
            expected
                .values()
                .filter(|e| e.status == MaterialStatus::Verified)
                .count()
        );
    }

    #[test]
    fn test_listing_preserves_registration_order() {
        let (ledger, _) = build_mixture(31);
        let all = ledger.list_materials(&MaterialFilter::all());
        assert_eq!(all.len(), MATERIALS);
        assert!(all.windows(2).all(|w| w[0].created_at <= w[1].created_at));

        let approved =
            ledger.list_materials(&MaterialFilter::all().status(MaterialStatus::Approved));
        let positions: Vec<usize> = approved
            .iter()
            .map(|m| all.iter().position(|a| a.id == m.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
