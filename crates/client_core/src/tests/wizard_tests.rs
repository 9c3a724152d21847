use super::*;
use crate::roster::MemberDraft;

const PHONE: &str = "9876543210";

fn login() -> VerifiedLogin {
    VerifiedLogin {
        phone: PHONE.to_string(),
    }
}

fn controller_at_team_step() -> WizardController {
    let mut wizard = WizardController::start(&login());
    wizard.set_owner_name("Suresh Kumar");
    wizard.set_press_name("Shree Printers");
    wizard.next().expect("step one");
    wizard.toggle_service("Wedding Cards").expect("service");
    wizard.next().expect("step two");
    wizard
}

fn assert_progress(wizard: &WizardController, expected: f32) {
    assert!((wizard.progress() - expected).abs() < f32::EPSILON);
}

#[test]
fn empty_owner_name_keeps_wizard_on_step_one() {
    let mut wizard = WizardController::start(&login());
    wizard.set_press_name("Shree Printers");

    assert_eq!(
        wizard.next(),
        Err(WizardError::Blocked {
            first_error: Field::OwnerName
        })
    );
    assert_eq!(wizard.step(), WizardStep::OwnerInfo);
    assert_eq!(
        wizard.errors().get(Field::OwnerName),
        Some(TranslationKey::OwnerNameRequired)
    );
    assert_eq!(wizard.errors().len(), 1);
}

#[test]
fn step_one_reports_every_invalid_field_in_form_order() {
    let mut wizard = WizardController::start(&login());
    wizard.set_press_name(&"x".repeat(31));
    wizard.set_whatsapp("12345");

    assert!(wizard.next().is_err());
    assert_eq!(wizard.errors().first(), Some(Field::OwnerName));
    assert_eq!(
        wizard.errors().get(Field::PressName),
        Some(TranslationKey::NameTooLong)
    );
    assert_eq!(
        wizard.errors().get(Field::Whatsapp),
        Some(TranslationKey::InvalidWhatsapp)
    );
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut wizard = WizardController::start(&login());
    assert!(wizard.next().is_err());
    assert!(wizard.errors().get(Field::OwnerName).is_some());

    wizard.set_owner_name("S");
    assert!(wizard.errors().get(Field::OwnerName).is_none());
    assert!(wizard.errors().get(Field::PressName).is_some());
}

#[test]
fn step_two_requires_a_service() {
    let mut wizard = WizardController::start(&login());
    wizard.set_owner_name("Suresh Kumar");
    wizard.set_press_name("Shree Printers");
    assert_eq!(wizard.next(), Ok(WizardStep::ServiceSelection));

    assert_eq!(
        wizard.next(),
        Err(WizardError::Blocked {
            first_error: Field::Services
        })
    );
    assert_eq!(
        wizard.toggle_service("Mugs"),
        Err(WizardError::UnknownService("Mugs".to_string()))
    );
    assert_eq!(wizard.toggle_service("Flex Banners"), Ok(true));
    assert_eq!(wizard.toggle_service("Flex Banners"), Ok(false));
    assert_eq!(wizard.toggle_service("Flex Banners"), Ok(true));
    assert_eq!(wizard.next(), Ok(WizardStep::TeamInvite));
}

#[test]
fn team_step_is_seeded_with_primary_owner() {
    let wizard = controller_at_team_step();
    let owner = wizard.primary_owner().expect("primary owner");
    assert_eq!(owner.name, "Suresh Kumar");
    assert_eq!(owner.mobile, PHONE);
    assert_eq!(owner.whatsapp, PHONE);
    assert_eq!(wizard.roster().policy(), WhatsappPolicy::FallbackToMobile);
}

#[test]
fn mirrored_whatsapp_flows_into_primary_owner() {
    let mut wizard = WizardController::start(&login());
    wizard.set_owner_name("Suresh Kumar");
    wizard.set_press_name("Shree Printers");
    wizard.set_same_as_contact(true);
    assert_eq!(wizard.session().contact.whatsapp(), PHONE);
    wizard.next().expect("step one");
    wizard.toggle_service("Letterheads").expect("service");
    wizard.next().expect("step two");

    assert_eq!(wizard.primary_owner().expect("owner").whatsapp, PHONE);
}

#[test]
fn back_navigation_only_reaches_completed_earlier_steps() {
    let mut wizard = controller_at_team_step();
    assert!(!wizard.go_to(WizardStep::TeamInvite));
    assert!(!wizard.go_to(WizardStep::Complete));

    assert!(wizard.go_to(WizardStep::OwnerInfo));
    assert_eq!(wizard.step(), WizardStep::OwnerInfo);
    assert!(!wizard.go_to(WizardStep::ServiceSelection));
    assert_eq!(wizard.step(), WizardStep::OwnerInfo);
}

#[test]
fn revisiting_step_one_refreshes_primary_owner() {
    let mut wizard = controller_at_team_step();
    wizard
        .roster_mut()
        .add(Role::Composer, MemberDraft::new("Ravi", "9123456780"))
        .expect("composer");

    assert!(wizard.go_to(WizardStep::OwnerInfo));
    wizard.set_owner_name("Ramesh");
    wizard.next().expect("step one");
    wizard.next().expect("step two");

    assert_eq!(wizard.roster().members(Role::Owner).len(), 1);
    assert_eq!(wizard.primary_owner().expect("owner").name, "Ramesh");
    assert_eq!(wizard.roster().members(Role::Composer).len(), 1);
}

#[test]
fn finish_hands_off_the_whole_session() {
    let mut wizard = controller_at_team_step();
    wizard
        .roster_mut()
        .add(Role::Operator, MemberDraft::new("Mohan", "9000000002"))
        .expect("operator");

    let handoff = wizard.finish().expect("finish");
    assert_eq!(wizard.step(), WizardStep::Complete);
    assert_progress(&wizard, 1.0);
    assert_eq!(handoff.owner_name, "Suresh Kumar");
    assert_eq!(handoff.press_name, "Shree Printers");
    assert_eq!(handoff.whatsapp_number, PHONE);
    assert_eq!(handoff.selected_services, ["Wedding Cards"]);
    assert_eq!(handoff.owners.len(), 1);
    assert_eq!(handoff.operators.len(), 1);
    assert!(!handoff.team_skipped);

    let request = wizard.navigation_request().expect("nav");
    assert_eq!(request.screen, Screen::Dashboard);
    assert_eq!(request.mode, NavigationMode::Replace);
    assert!(!wizard.go_to(WizardStep::OwnerInfo));
}

#[test]
fn skip_completes_without_team_gate() {
    let mut wizard = controller_at_team_step();
    let handoff = wizard.skip().expect("skip");
    assert!(handoff.team_skipped);
    assert_eq!(wizard.step(), WizardStep::Complete);
}

#[test]
fn actions_outside_their_step_are_refused() {
    let mut wizard = WizardController::start(&login());
    assert_eq!(
        wizard.finish(),
        Err(WizardError::WrongStep {
            current: WizardStep::OwnerInfo
        })
    );
    assert!(wizard.skip().is_err());

    let mut wizard = controller_at_team_step();
    assert_eq!(
        wizard.next(),
        Err(WizardError::WrongStep {
            current: WizardStep::TeamInvite
        })
    );
}

#[test]
fn progress_tracks_the_current_step() {
    let mut wizard = WizardController::start(&login());
    assert_progress(&wizard, 1.0 / 3.0);
    wizard.set_owner_name("Suresh Kumar");
    wizard.set_press_name("Shree Printers");
    wizard.next().expect("step one");
    assert_progress(&wizard, 2.0 / 3.0);
    wizard.toggle_service("Wedding Cards").expect("service");
    wizard.next().expect("step two");
    assert_progress(&wizard, 1.0);
}

#[test]
fn route_params_rebuild_the_same_session() {
    let mut wizard = controller_at_team_step();
    wizard
        .roster_mut()
        .add(Role::Composer, MemberDraft::new("Ravi", "9123456780"))
        .expect("composer");

    let request = wizard.navigation_request().expect("nav");
    assert_eq!(request.screen, Screen::BusinessProfileStepThree);
    assert_eq!(request.mode, NavigationMode::Push);
    assert_eq!(request.params.get("ownerName"), Some("Suresh Kumar"));
    assert_eq!(request.params.get("selectedServices"), Some(r#"["Wedding Cards"]"#));

    let resumed = WizardController::resume(WizardStep::TeamInvite, &request.params)
        .expect("resume");
    assert_eq!(resumed.session(), wizard.session());
    assert!(resumed.is_completed(WizardStep::OwnerInfo));
    assert!(resumed.is_completed(WizardStep::ServiceSelection));
    assert!(!resumed.is_completed(WizardStep::TeamInvite));
}

#[test]
fn route_params_require_phone_and_well_formed_lists() {
    let params = RouteParams::new();
    assert!(matches!(
        WizardSession::from_route_params(&params),
        Err(RouteParamsError::Missing("phoneNumber"))
    ));

    let mut params = RouteParams::new();
    params.insert("phoneNumber", PHONE);
    params.insert("owners", "{not json");
    assert!(matches!(
        WizardSession::from_route_params(&params),
        Err(RouteParamsError::Malformed { key: "owners", .. })
    ));

    let mut params = RouteParams::new();
    params.insert("phoneNumber", PHONE);
    let session = WizardSession::from_route_params(&params).expect("minimal params");
    assert!(session.roster.is_empty());
    assert_eq!(session.effective_whatsapp(), PHONE);
}

#[test]
fn finish_requires_an_owner_but_skip_does_not() {
    let mut session = WizardSession::new(PHONE);
    session.owner_name = "Suresh Kumar".to_string();
    session.press_name = "Shree Printers".to_string();
    session.selected_services.insert("Wedding Cards".to_string());
    let mut wizard = WizardController::with_session(session);
    wizard.step = WizardStep::TeamInvite;
    assert!(!wizard.roster().has_owner());

    assert_eq!(
        wizard.finish(),
        Err(WizardError::Blocked {
            first_error: Field::Team
        })
    );
    assert_eq!(
        wizard.errors().get(Field::Team),
        Some(TranslationKey::OwnerRequired)
    );
    assert_eq!(wizard.step(), WizardStep::TeamInvite);

    let handoff = wizard.skip().expect("skip");
    assert!(handoff.team_skipped);
    assert!(handoff.owners.is_empty());
}

#[test]
fn owner_whatsapp_cannot_reuse_an_invited_members_number() {
    let mut wizard = controller_at_team_step();
    wizard
        .roster_mut()
        .add(Role::Composer, MemberDraft::new("Ravi", "9123456780"))
        .expect("composer");

    assert!(wizard.go_to(WizardStep::OwnerInfo));
    wizard.set_whatsapp("9123456780");
    assert_eq!(
        wizard.next(),
        Err(WizardError::Blocked {
            first_error: Field::Whatsapp
        })
    );
    assert_eq!(
        wizard.errors().get(Field::Whatsapp),
        Some(TranslationKey::WhatsappInUse)
    );
    assert_eq!(wizard.step(), WizardStep::OwnerInfo);
    assert_eq!(wizard.primary_owner().expect("owner").whatsapp, PHONE);

    wizard.set_whatsapp("9000000005");
    assert_eq!(wizard.next(), Ok(WizardStep::ServiceSelection));
    assert_eq!(wizard.next(), Ok(WizardStep::TeamInvite));
    assert_eq!(wizard.primary_owner().expect("owner").whatsapp, "9000000005");
    assert_eq!(wizard.roster().members(Role::Composer)[0].mobile, "9123456780");
}
