// Static market insights: salary estimates, company migration trends and skill gaps.
// Pure lookups over fixed tables; a miss returns the documented default record.

pub mod handlers;
pub mod migration;
pub mod salary;
pub mod skills;
