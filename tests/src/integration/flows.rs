//! # Supply Chain Flows
//!
//! Drives identity and ledger together the way the four dashboards do:
//!
//! ```text
//! Farmer ──register──→ Transporter ──transport──→ Plant ──verify──→ Admin ──decide
//! ```

#[cfg(test)]
mod tests {
    use eco_01_identity::{IdentityApi, IdentityService};
    use eco_02_ledger::{
        CreditFilter, LedgerApi, LedgerConfig, LedgerError, LedgerService, MaterialFilter,
        MaterialStatus, MockTimeSource, TransitionPolicy, ValidationError,
    };
    use eco_runtime::{seed_demo_data, DashboardSnapshot, EcoContainer, RuntimeConfig};
    use shared_types::{CreditId, MaterialId, Role, UserId};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Actors {
        farmer: UserId,
        transporter: UserId,
        plant: UserId,
        admin: UserId,
    }

    fn login_all(identity: &IdentityService) -> Actors {
        Actors {
            farmer: identity.login("farmer@example.com", "farmer").unwrap().id,
            transporter: identity.login("hauler@example.com", "transporter").unwrap().id,
            plant: identity.login("plant@example.com", "plant").unwrap().id,
            admin: identity.login("admin@example.com", "admin").unwrap().id,
        }
    }

    fn create_ledger(policy: TransitionPolicy) -> LedgerService<MockTimeSource> {
        LedgerService::new(LedgerConfig::with_policy(policy), MockTimeSource::new(1_000))
            .unwrap()
    }

    // =============================================================================
    // HAPPY PATHS
    // =============================================================================

    #[test]
    fn test_farm_to_approved_credit() {
        let identity = IdentityService::new();
        let actors = login_all(&identity);
        let ledger = create_ledger(TransitionPolicy::Strict);

        let material = ledger
            .register_material(
                "corn_stover",
                1000.0,
                "41.8781° N, 87.6298° W",
                actors.farmer,
            )
            .unwrap();
        assert_eq!(material.status, MaterialStatus::Registered);
        assert!(material.qr_id.as_str().starts_with("ECO-"));

        ledger
            .update_transport(&material.id, actors.transporter, "40.7128° N, 74.0060° W")
            .unwrap();

        let outcome = ledger
            .verify_material(&material.id, actors.plant, 730.0)
            .unwrap();
        assert!((outcome.credit.credit_value - 584.0).abs() < 1e-9);
        assert!(outcome.credit.is_pending());

        let pending = ledger.list_credit_views(&CreditFilter::pending());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].material.as_ref().unwrap().id, material.id);

        let decision = ledger
            .decide_credit(&outcome.credit.id, true, actors.admin)
            .unwrap();
        let approved = decision.material.unwrap();
        assert_eq!(approved.status, MaterialStatus::Approved);
        assert_eq!(approved.farmer_id, actors.farmer);
        assert_eq!(approved.transporter_id, Some(actors.transporter));
        assert_eq!(approved.plant_id, Some(actors.plant));
        assert_eq!(approved.verified_weight, Some(730.0));
        assert_eq!(approved.weight, 1000.0);

        let stats = ledger.stats();
        assert_eq!(stats.total_materials, 1);
        assert_eq!(stats.materials_approved, 1);
        assert!((stats.total_carbon_credits - 584.0).abs() < 1e-9);
        assert!((stats.approved_carbon_credits - 584.0).abs() < 1e-9);
        assert_eq!(stats.approval_ratio(), Some(1.0));
    }

    #[test]
    fn test_rejected_credit_keeps_value_out_of_approved_total() {
        let identity = IdentityService::new();
        let actors = login_all(&identity);
        let ledger = create_ledger(TransitionPolicy::Strict);

        let material = ledger
            .register_material("wood_chips", 200.0, "yard", actors.farmer)
            .unwrap();
        ledger
            .update_transport(&material.id, actors.transporter, "road")
            .unwrap();
        let outcome = ledger
            .verify_material(&material.id, actors.plant, 150.0)
            .unwrap();
        let decision = ledger
            .decide_credit(&outcome.credit.id, false, actors.admin)
            .unwrap();

        assert_eq!(decision.material.unwrap().status, MaterialStatus::Rejected);
        assert!(!decision.credit.approved);
        assert_eq!(decision.credit.admin_id, Some(actors.admin));

        let stats = ledger.stats();
        assert_eq!(stats.materials_rejected, 1);
        assert!((stats.total_carbon_credits - 120.0).abs() < 1e-9);
        assert_eq!(stats.approved_carbon_credits, 0.0);
        assert!((stats.pending_carbon_credits() - 120.0).abs() < 1e-9);
        assert!(ledger.list_credits(&CreditFilter::pending()).is_empty());
    }

    #[test]
    fn test_role_dashboards_see_their_own_materials() {
        let identity = IdentityService::new();
        let actors = login_all(&identity);
        let other_farmer = identity.login("other@example.com", "farmer").unwrap().id;
        let ledger = create_ledger(TransitionPolicy::Strict);

        let mine = ledger
            .register_material("rice_husks", 50.0, "paddy", actors.farmer)
            .unwrap();
        ledger
            .register_material("rice_husks", 60.0, "paddy", other_farmer)
            .unwrap();
        ledger
            .update_transport(&mine.id, actors.transporter, "road")
            .unwrap();

        let farmer_view = ledger.list_materials(&MaterialFilter::all().farmer(actors.farmer));
        assert_eq!(farmer_view.len(), 1);
        assert_eq!(farmer_view[0].id, mine.id);

        let transporter_view =
            ledger.list_materials(&MaterialFilter::all().transporter(actors.transporter));
        assert_eq!(transporter_view.len(), 1);

        let pickup_queue =
            ledger.list_materials(&MaterialFilter::all().status(MaterialStatus::Registered));
        assert_eq!(pickup_queue.len(), 1);
        assert_eq!(pickup_queue[0].farmer_id, other_farmer);

        let plant_queue =
            ledger.list_materials(&MaterialFilter::all().status(MaterialStatus::InTransit));
        assert_eq!(plant_queue.len(), 1);
    }

    #[test]
    fn test_scanned_qr_resolves_material() {
        let identity = IdentityService::new();
        let actors = login_all(&identity);
        let ledger = create_ledger(TransitionPolicy::Strict);

        let material = ledger
            .register_material("wheat_straw", 75.0, "field", actors.farmer)
            .unwrap();
        let scanned = format!("  {}\n", material.qr_id);
        assert_eq!(ledger.get_material_by_qr(&scanned).unwrap().id, material.id);
        assert!(ledger.get_material_by_qr("ECO-00000000").is_none());
    }

    // =============================================================================
    // FAILURE PATHS
    // =============================================================================

    #[test]
    fn test_strict_rejects_skipped_steps_without_side_effects() {
        let identity = IdentityService::new();
        let actors = login_all(&identity);
        let ledger = create_ledger(TransitionPolicy::Strict);

        let material = ledger
            .register_material("corn_stover", 100.0, "farm", actors.farmer)
            .unwrap();
        let before = ledger.stats();

        let err = ledger
            .verify_material(&material.id, actors.plant, 90.0)
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.stats(), before);
        assert!(ledger.credit_for_material(&material.id).is_none());
        assert_eq!(ledger.get_material(&material.id).unwrap(), material);
    }

    #[test]
    fn test_strict_rejects_second_decision() {
        let identity = IdentityService::new();
        let actors = login_all(&identity);
        let ledger = create_ledger(TransitionPolicy::Strict);

        let material = ledger
            .register_material("corn_stover", 100.0, "farm", actors.farmer)
            .unwrap();
        ledger
            .update_transport(&material.id, actors.transporter, "road")
            .unwrap();
        let outcome = ledger
            .verify_material(&material.id, actors.plant, 100.0)
            .unwrap();
        ledger
            .decide_credit(&outcome.credit.id, true, actors.admin)
            .unwrap();

        let err = ledger
            .decide_credit(&outcome.credit.id, false, actors.admin)
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::Validation(ValidationError::AlreadyDecided {
                credit_id: outcome.credit.id
            })
        );
        assert_eq!(
            ledger.get_material(&material.id).unwrap().status,
            MaterialStatus::Approved
        );
    }

    #[test]
    fn test_lenient_second_decision_overwrites() {
        let identity = IdentityService::new();
        let actors = login_all(&identity);
        let ledger = create_ledger(TransitionPolicy::Lenient);

        let material = ledger
            .register_material("corn_stover", 100.0, "farm", actors.farmer)
            .unwrap();
        let outcome = ledger
            .verify_material(&material.id, actors.plant, 100.0)
            .unwrap();
        ledger
            .decide_credit(&outcome.credit.id, true, actors.admin)
            .unwrap();
        let second = ledger
            .decide_credit(&outcome.credit.id, false, actors.admin)
            .unwrap();

        assert_eq!(second.material.unwrap().status, MaterialStatus::Rejected);
        assert_eq!(ledger.stats().approved_carbon_credits, 0.0);
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let ledger = create_ledger(TransitionPolicy::Strict);
        let someone = UserId::new();
        let missing = MaterialId::new();

        let err = ledger
            .update_transport(&missing, someone, "road")
            .unwrap_err();
        assert_eq!(err, LedgerError::MaterialNotFound(missing));
        assert!(ledger
            .decide_credit(&CreditId::new(), true, someone)
            .unwrap_err()
            .is_not_found());
        assert_eq!(ledger.stats().total_materials, 0);
    }

    // =============================================================================
    // RUNTIME WIRING
    // =============================================================================

    #[test]
    fn test_seeded_runtime_snapshot() {
        let container =
            EcoContainer::with_time_source(RuntimeConfig::default(), MockTimeSource::new(0))
                .unwrap();
        seed_demo_data(
            container.identity.as_ref(),
            container.ledger.as_ref(),
            container.config.ledger.transition_policy,
        )
        .unwrap();

        let farmer1 = container
            .identity
            .find_user("farmer1", Role::Farmer)
            .unwrap();
        let farmer1_materials = container
            .ledger
            .list_materials(&MaterialFilter::all().farmer(farmer1.id));
        assert_eq!(farmer1_materials.len(), 2);

        let snapshot = DashboardSnapshot::capture(&container);
        assert_eq!(snapshot.stats.total_materials, 3);
        assert_eq!(snapshot.approved_credits.len(), 1);
        assert_eq!(
            snapshot.approved_credits[0]
                .material
                .as_ref()
                .unwrap()
                .material_type,
            "wheat_straw"
        );
    }
}
