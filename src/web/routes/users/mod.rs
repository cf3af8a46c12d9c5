mod detail;
mod list;

pub(crate) use detail::UserDetailPage;
pub(crate) use list::UsersListPage;
