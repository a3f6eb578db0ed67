//! End-to-end panel flows over the mock ledger with a hand-driven clock.

use std::time::Duration;

use secureid_core::panels::{
    add_credential, compose_reply, load_profile, submit_identity, verify_identity, ChatSession,
    CreateIdentityForm, IdentityViewer, Sender, Session, ShellState, Tab, CREATE_FAILED_MESSAGE,
    VIEW_FAILED_MESSAGE,
};
use secureid_core::panels::start_session;
use secureid_core::{
    canned_reply, demo_credentials, AppConfig, Identity, LaunchOverrides, LedgerCall,
    ManualScheduler, MockLedger, ProfileSource, StaticWallet, Timings, PLACEHOLDER_ACCOUNT,
    PLACEHOLDER_IMAGE_REF,
};
use tokio_test::{assert_pending, assert_ready, task};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn connected_shell() -> ShellState {
    let mut shell = ShellState::new();
    shell.connected(Session {
        account: PLACEHOLDER_ACCOUNT.to_string(),
        has_identity: false,
    });
    shell
}

fn is_create(call: &LedgerCall) -> bool {
    matches!(call, LedgerCall::CreateIdentity { .. })
}

#[test]
fn blank_account_settings_connect_the_placeholder() {
    let overrides = LaunchOverrides {
        account: Some("  ".to_string()),
        ..Default::default()
    };
    let config = AppConfig::load_with(&overrides, |k| {
        (k == "SECUREID_ACCOUNT").then(String::new)
    })
    .expect("blank values are not errors");

    let wallet = StaticWallet::new(config.wallet_accounts.clone());
    let ledger = MockLedger::new();
    let mut start = task::spawn(start_session(
        Some(&wallet),
        &ledger,
        &config.placeholder_account,
    ));
    let session = assert_ready!(start.poll());

    assert_eq!(session.account, PLACEHOLDER_ACCOUNT);
    assert_eq!(
        ledger.calls(),
        vec![LedgerCall::HasIdentity {
            account: PLACEHOLDER_ACCOUNT.to_string()
        }]
    );
}

#[test]
fn blank_form_never_reaches_the_ledger() {
    let ledger = MockLedger::new();
    let shell = connected_shell();

    for (name, email) in [("", "ada@example.com"), ("Ada", ""), ("", "")] {
        let mut form = CreateIdentityForm {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        };
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Please fill out all required fields"));
    }

    assert_eq!(ledger.count_calls(is_create), 0);
    assert_eq!(shell.active_tab, Tab::Create);
}

#[test]
fn creation_switches_to_view_after_confirmation_delay() {
    let ledger = MockLedger::new();
    let scheduler = ManualScheduler::new();
    let timings = Timings::default();
    let mut shell = connected_shell();

    let mut form = CreateIdentityForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        ..Default::default()
    };
    let draft = form.begin_submit().expect("valid form");

    let mut submit = task::spawn(submit_identity(&ledger, &scheduler, &timings, &draft));
    assert_pending!(submit.poll());
    assert_eq!(
        ledger.calls(),
        vec![LedgerCall::CreateIdentity {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            image_ref: PLACEHOLDER_IMAGE_REF.to_string(),
        }]
    );

    scheduler.advance(ms(1499));
    assert_pending!(submit.poll());
    assert!(form.is_submitting());
    assert_eq!(shell.active_tab, Tab::Create);

    scheduler.advance(ms(1));
    let outcome = assert_ready!(submit.poll());
    if form.finish_submit(&outcome) {
        shell.identity_created();
    }
    assert_eq!(shell.active_tab, Tab::View);
    assert!(shell.has_identity);
    assert!(form.error.is_none());

    // The view panel mounts and fills in after its own delay.
    let mut viewer = IdentityViewer::new();
    let mut load = task::spawn(load_profile(
        &ledger,
        &scheduler,
        &timings,
        ProfileSource::Demo,
        &shell.account,
    ));
    assert_pending!(load.poll());
    assert!(viewer.loading);

    scheduler.advance(ms(1000));
    viewer.apply_profile(assert_ready!(load.poll()));
    assert!(!viewer.loading);
    assert_eq!(viewer.identity, Identity::demo());
    assert_eq!(viewer.credentials, demo_credentials());
}

#[test]
fn rejected_creation_surfaces_generic_error() {
    let ledger = MockLedger::rejecting("node offline");
    let scheduler = ManualScheduler::new();
    let timings = Timings::default();
    let mut shell = connected_shell();

    let mut form = CreateIdentityForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        ..Default::default()
    };
    let draft = form.begin_submit().expect("valid form");

    let mut submit = task::spawn(submit_identity(&ledger, &scheduler, &timings, &draft));
    let outcome = assert_ready!(submit.poll());
    assert!(outcome.is_err());
    assert_eq!(scheduler.pending(), 0);

    if form.finish_submit(&outcome) {
        shell.identity_created();
    }
    assert_eq!(form.error.as_deref(), Some(CREATE_FAILED_MESSAGE));
    assert!(!form.is_submitting());
    assert_eq!(shell.active_tab, Tab::Create);
}

#[test]
fn credential_is_appended_after_delay() {
    let ledger = MockLedger::new();
    let scheduler = ManualScheduler::new();
    let timings = Timings::default();

    let mut viewer = IdentityViewer::new();
    viewer.apply_profile(Ok(secureid_core::panels::Profile::demo()));
    let before = viewer.credentials.clone();

    viewer.credential_kind = "Passport".to_string();
    viewer.credential_hash = "0xfeedbeef".to_string();
    let credential = viewer.begin_add_credential().expect("both fields set");

    let mut add = task::spawn(add_credential(&ledger, &scheduler, &timings, credential));
    assert_pending!(add.poll());
    assert_eq!(viewer.credentials, before);

    scheduler.advance(ms(1000));
    viewer.finish_add_credential(assert_ready!(add.poll()));

    assert_eq!(viewer.credentials.len(), before.len() + 1);
    assert_eq!(&viewer.credentials[..before.len()], &before[..]);
    let last = viewer.credentials.last().unwrap();
    assert_eq!(last.kind, "Passport");
    assert_eq!(last.hash, "0xfeedbeef");
    assert_eq!(
        ledger.count_calls(|c| matches!(c, LedgerCall::AddCredential { .. })),
        1
    );
}

#[test]
fn incomplete_credential_is_not_submitted() {
    let ledger = MockLedger::new();
    let mut viewer = IdentityViewer::new();
    viewer.apply_profile(Ok(secureid_core::panels::Profile::demo()));

    viewer.credential_hash = "0x01".to_string();
    assert!(viewer.begin_add_credential().is_none());
    assert!(ledger.calls().is_empty());
    assert_eq!(viewer.credentials.len(), 2);
}

#[test]
fn verify_flips_flag_after_delay_and_stays() {
    let ledger = MockLedger::new();
    let scheduler = ManualScheduler::new();
    let timings = Timings::default();

    let mut viewer = IdentityViewer::new();
    viewer.apply_profile(Ok(secureid_core::panels::Profile::demo()));
    assert!(viewer.begin_verify());

    let mut verify = task::spawn(verify_identity(&ledger, &scheduler, &timings));
    assert_pending!(verify.poll());
    assert!(!viewer.identity.verified);

    scheduler.advance(ms(999));
    assert_pending!(verify.poll());
    assert!(!viewer.identity.verified);

    scheduler.advance(ms(1));
    viewer.finish_verify(assert_ready!(verify.poll()));
    assert!(viewer.identity.verified);

    // Further attempts are refused and nothing can unset it.
    assert!(!viewer.begin_verify());
    assert!(viewer.identity.verified);
    assert_eq!(ledger.calls(), vec![LedgerCall::VerifyIdentity]);
}

#[test]
fn rejected_verification_keeps_flag_unset() {
    let ledger = MockLedger::rejecting("no");
    let scheduler = ManualScheduler::new();
    let timings = Timings::default();

    let mut viewer = IdentityViewer::new();
    viewer.apply_profile(Ok(secureid_core::panels::Profile::demo()));
    assert!(viewer.begin_verify());

    let mut verify = task::spawn(verify_identity(&ledger, &scheduler, &timings));
    viewer.finish_verify(assert_ready!(verify.poll()));

    assert!(!viewer.identity.verified);
    assert_eq!(viewer.error.as_deref(), Some(VIEW_FAILED_MESSAGE));
    assert!(viewer.begin_verify());
}

#[test]
fn ledger_profile_source_uses_identity_info() {
    let ledger = MockLedger::new();
    let scheduler = ManualScheduler::new();
    let timings = Timings::default();

    let mut load = task::spawn(load_profile(
        &ledger,
        &scheduler,
        &timings,
        ProfileSource::Ledger,
        "0xabc",
    ));
    assert_pending!(load.poll());
    scheduler.advance(timings.profile_load());
    let profile = assert_ready!(load.poll()).unwrap();

    assert_eq!(profile.identity.name, "John Doe");
    assert_eq!(profile.identity.email, "john@example.com");
    assert!(profile.credentials.is_empty());
    assert_eq!(
        ledger.calls(),
        vec![LedgerCall::GetIdentityInfo {
            account: "0xabc".to_string()
        }]
    );
}

#[test]
fn chat_reply_waits_for_typing_delay() {
    let scheduler = ManualScheduler::new();
    let timings = Timings::default();
    let mut session = ChatSession::new();

    session.draft = "How does verification work?".to_string();
    let text = session.begin_send().expect("non-empty draft");
    assert!(session.is_typing());
    assert_eq!(session.messages().len(), 2);

    let mut reply = task::spawn(compose_reply(&scheduler, &timings, &text));
    assert_pending!(reply.poll());

    scheduler.advance(ms(999));
    assert_pending!(reply.poll());
    assert_eq!(session.messages().len(), 2);

    scheduler.advance(ms(1));
    let answer = assert_ready!(reply.poll());
    session.deliver_reply(answer);

    // "how does" matches before "verification".
    assert_eq!(answer, canned_reply("how does"));
    assert!(!session.is_typing());
    assert_eq!(session.messages().last().unwrap().sender, Sender::Bot);
}

#[test]
fn chat_length_is_one_plus_two_n() {
    let scheduler = ManualScheduler::new();
    let timings = Timings::default();
    let mut session = ChatSession::new();

    let inputs = ["what is this", "verify me", "credential?", "thanks", "weather"];
    for (n, input) in inputs.iter().enumerate() {
        session.draft = input.to_string();
        let text = session.begin_send().unwrap();

        let mut reply = task::spawn(compose_reply(&scheduler, &timings, &text));
        assert_pending!(reply.poll());
        scheduler.advance(timings.bot_reply());
        session.deliver_reply(assert_ready!(reply.poll()));

        assert_eq!(session.messages().len(), 1 + 2 * (n + 1));
    }

    let senders: Vec<_> = session.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders[0], Sender::Bot);
    for pair in senders[1..].chunks(2) {
        assert_eq!(pair, &[Sender::User, Sender::Bot]);
    }
}
