//! Member repository module.

mod r#trait;
pub use r#trait::MemberRepository;

mod mock;
pub use mock::MockMemberRepository;
