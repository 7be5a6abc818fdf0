use crate::{
    data::responsibility_request::{NewResponsibilityRequest, ResponsibilityRequestRepository},
    model::responsibility::{RequestKind, RequestStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod decide;
mod find_pending_application;
