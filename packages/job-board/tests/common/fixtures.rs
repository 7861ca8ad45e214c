// Job fixtures shared by the integration tests
#![allow(dead_code)]

use job_board::{DragLocation, Job, JobStatus, JobStore, MoveEvent};

pub fn job(id: &str, status: JobStatus) -> Job {
    Job {
        id: id.into(),
        title: format!("Role {}", id),
        company: "Acme".to_string(),
        url: None,
        referral_info: None,
        hiring_manager_links: vec![],
        status,
    }
}

/// `{id:"1", status:"Opportunities", title:"A", company:"B", hiringManagerLinks:[]}`
pub fn opportunity_a() -> Job {
    Job {
        id: "1".into(),
        title: "A".to_string(),
        company: "B".to_string(),
        url: None,
        referral_info: None,
        hiring_manager_links: vec![],
        status: JobStatus::Opportunities,
    }
}

pub fn single_job_store() -> JobStore {
    JobStore::new(vec![opportunity_a()])
}

pub fn mixed_store() -> JobStore {
    JobStore::new(vec![
        job("1", JobStatus::Opportunities),
        job("2", JobStatus::Applied),
        job("3", JobStatus::Opportunities),
        job("4", JobStatus::HiringManagers),
    ])
}

pub fn move_event(
    id: &str,
    from: (JobStatus, usize),
    to: Option<(JobStatus, usize)>,
) -> MoveEvent {
    MoveEvent {
        job_id: id.into(),
        source: DragLocation::new(from.0, from.1),
        destination: to.map(|(column, index)| DragLocation::new(column, index)),
    }
}
