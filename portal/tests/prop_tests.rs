use govtool_governance::{Field, ProposalDraft};
use govtool_portal::harness::fixtures;
use govtool_types::{NetworkId, ProposalType};
use govtool_validation::{validate_anchor, validate_anchor_url};
use proptest::prelude::*;

fn draft(fields: &fixtures::ProposalFields) -> ProposalDraft {
    let mut draft = ProposalDraft::new(fields.proposal_type);
    draft.title = fields.title.clone();
    draft.abstract_text = fields.abstract_text.clone();
    draft.motivation = fields.motivation.clone();
    draft.rationale = fields.rationale.clone();
    draft.receiving_address = fields.receiving_address.clone().unwrap_or_default();
    draft.amount = fields.amount.clone().unwrap_or_default();
    draft
}

fn proposal_type() -> impl Strategy<Value = ProposalType> {
    prop::sample::select(ProposalType::ALL.to_vec())
}

proptest! {
    /// Generated "valid" data must actually satisfy the form rules, or the
    /// browser-style suites would be testing nothing.
    #[test]
    fn valid_fixtures_pass_validation(seed in 0usize..10_000, ty in proposal_type()) {
        let fields = fixtures::valid_proposal(ty, seed, NetworkId::Preview);
        let content = draft(&fields).validate(NetworkId::Preview);
        prop_assert!(content.is_ok(), "{:?}", content.err());
        prop_assert!(validate_anchor(&fixtures::valid_url(seed), &fixtures::valid_hash(seed)).is_ok());
    }

    #[test]
    fn invalid_fixtures_fail_every_text_field(seed in 0usize..10_000, ty in proposal_type()) {
        let fields = fixtures::invalid_proposal(ty, seed);
        let d = draft(&fields);
        for field in [Field::Title, Field::Abstract, Field::Motivation, Field::Rationale] {
            prop_assert!(d.check(field, NetworkId::Preview).is_err(), "{:?}", field);
        }
        prop_assert!(validate_anchor_url(&fixtures::invalid_url(seed)).is_err());
    }

    /// A receiving address for one network never validates on another.
    #[test]
    fn receiving_address_is_network_bound(seed in 0usize..256) {
        let mut d = ProposalDraft::new(ProposalType::Treasury);
        d.receiving_address = fixtures::receiving_address(NetworkId::Mainnet, seed);
        prop_assert!(d.check(Field::ReceivingAddress, NetworkId::Mainnet).is_ok());
        prop_assert!(d.check(Field::ReceivingAddress, NetworkId::Preview).is_err());
    }
}
